//! Upstream character API integration.
//!
//! - [`transport`] - HTTP transport trait and its `reqwest` implementation
//! - [`fetch_client`] - Cache-fronted fetch with error normalization
//! - [`records`] - Raw upstream record shapes

pub mod fetch_client;
pub mod records;
pub mod transport;

pub use fetch_client::FetchClient;
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
