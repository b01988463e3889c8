//! Character views assembled from upstream records.

use serde::Serialize;

/// A vehicle a character has piloted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
}

/// Starships share the vehicle shape.
pub type Starship = Vehicle;

/// A film a character appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub title: String,
    pub release_date: String,
    pub director: String,
}

/// Fully resolved character view.
///
/// Rebuilt on every request from (cached) upstream payloads; nothing here is
/// persisted locally. List-valued fields are `None` when the upstream record
/// has no entries, so they serialize as `null` rather than `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    pub starships: Option<Vec<Starship>>,
    pub vehicles: Option<Vec<Vehicle>>,
    pub films: Option<Vec<Film>>,
}

/// Partial character view used by listings and favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSummary {
    pub id: String,
    pub name: String,
    pub species: Option<String>,
    pub homeworld: Option<String>,
}

impl From<Character> for CharacterSummary {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
            species: character.species,
            homeworld: character.homeworld,
        }
    }
}
