//! Raw record shapes returned by the upstream API.
//!
//! Only the fields the resolver reads are modelled. Missing or `null`
//! fields decode to their defaults so a sparse record never fails to parse.

use serde::{Deserialize, Deserializer};

use crate::domain::entities::{Film, Vehicle};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Listing endpoint payload (`/api/people`).
#[derive(Debug, Clone, Deserialize)]
pub struct PeoplePage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<PersonRecord>,
}

/// A single person record.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub birth_year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub species: Vec<String>,
    #[serde(default)]
    pub homeworld: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicles: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starships: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub films: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl PersonRecord {
    /// Character id encoded in the record's own URL.
    ///
    /// Upstream URLs end with a slash (`.../people/1/`), so the id is the
    /// second-to-last `/`-separated segment.
    pub fn id(&self) -> String {
        let segments: Vec<&str> = self.url.split('/').collect();
        if segments.len() < 2 {
            return String::new();
        }
        segments[segments.len() - 2].to_string()
    }

    /// Homeworld URL, treating an empty string as absent.
    pub fn homeworld_url(&self) -> Option<&str> {
        self.homeworld.as_deref().filter(|url| !url.is_empty())
    }
}

/// Species or planet record; only the name is used.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedRecord {
    pub fn into_name(self) -> Option<String> {
        self.name.filter(|name| !name.is_empty())
    }
}

/// Vehicle or starship record.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub manufacturer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
}

impl From<VehicleRecord> for Vehicle {
    fn from(record: VehicleRecord) -> Self {
        Self {
            name: record.name,
            manufacturer: record.manufacturer,
            model: record.model,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilmRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub director: String,
}

impl From<FilmRecord> for Film {
    fn from(record: FilmRecord) -> Self {
        Self {
            title: record.title,
            release_date: record.release_date,
            director: record.director,
        }
    }
}
