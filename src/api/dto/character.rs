//! DTOs for character endpoints.

use serde::Serialize;

use crate::domain::entities::{Character, CharacterSummary};

/// `status` value of every successful response envelope.
pub const SUCCESS: &str = "success";

/// Response for `GET /characters` and `GET /favorites`.
#[derive(Debug, Serialize)]
pub struct CharacterListResponse {
    pub status: &'static str,
    pub characters: Vec<CharacterSummary>,
}

impl CharacterListResponse {
    pub fn new(characters: Vec<CharacterSummary>) -> Self {
        Self {
            status: SUCCESS,
            characters,
        }
    }
}

/// Response for `GET /characters/{id}`.
#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub status: &'static str,
    pub character: Character,
}

impl CharacterResponse {
    pub fn new(character: Character) -> Self {
        Self {
            status: SUCCESS,
            character,
        }
    }
}
