//! Character resolution against the upstream API.

use std::sync::Arc;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Character, CharacterSummary, Film, Vehicle};
use crate::error::AppError;
use crate::infrastructure::upstream::FetchClient;
use crate::infrastructure::upstream::records::{
    FilmRecord, NamedRecord, PeoplePage, PersonRecord, VehicleRecord,
};

/// Builds denormalized character views from upstream records.
///
/// Each character fans out to its species, homeworld, vehicles, starships and
/// films concurrently and waits for all of them. Any failed sub-fetch fails
/// the whole resolution; partial views are never returned.
pub struct CharacterService {
    fetcher: Arc<FetchClient>,
    base_url: String,
}

impl CharacterService {
    /// Creates a resolver for the upstream rooted at `base_url`
    /// (e.g. `https://swapi.dev`).
    pub fn new(fetcher: Arc<FetchClient>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn people_url(&self) -> String {
        format!("{}/api/people", self.base_url)
    }

    fn person_url(&self, character_id: &str) -> String {
        format!("{}/api/people/{}", self.base_url, character_id)
    }

    /// Lists characters from the upstream listing endpoint.
    ///
    /// Only `id`, `name`, `species` and `homeworld` are resolved. Order and
    /// count follow the upstream page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if any fetch fails.
    pub async fn list_characters(&self) -> Result<Vec<CharacterSummary>, AppError> {
        let page: PeoplePage = self.fetcher.fetch_as(&self.people_url()).await?;

        try_join_all(page.results.iter().map(|person| self.summarize(person))).await
    }

    /// Resolves a single character with all sub-resources.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `character_id` is empty or would
    /// escape the people path; no request is made in that case.
    /// Returns [`AppError::Upstream`] if the base record or any sub-resource
    /// cannot be fetched.
    pub async fn get_character(&self, character_id: &str) -> Result<Character, AppError> {
        if character_id.trim().is_empty() {
            return Err(AppError::bad_request(
                "character id is absent in route param",
            ));
        }
        if character_id.contains(['/', '?', '#']) {
            return Err(AppError::bad_request("not a valid characterId"));
        }

        let person: PersonRecord = self
            .fetcher
            .fetch_as(&self.person_url(character_id))
            .await?;

        let (species, homeworld, vehicles, starships, films) = tokio::try_join!(
            self.species_name(&person.species),
            self.homeworld_name(person.homeworld_url()),
            self.vehicles(&person.vehicles),
            self.vehicles(&person.starships),
            self.films(&person.films),
        )?;

        Ok(Character {
            id: person.id(),
            name: person.name,
            birth_year: person.birth_year,
            gender: person.gender,
            species,
            homeworld,
            starships,
            vehicles,
            films,
        })
    }

    async fn summarize(&self, person: &PersonRecord) -> Result<CharacterSummary, AppError> {
        let (species, homeworld) = tokio::try_join!(
            self.species_name(&person.species),
            self.homeworld_name(person.homeworld_url()),
        )?;

        Ok(CharacterSummary {
            id: person.id(),
            name: person.name.clone(),
            species,
            homeworld,
        })
    }

    /// Name of the first listed species; further entries are ignored.
    async fn species_name(&self, urls: &[String]) -> Result<Option<String>, AppError> {
        let Some(first) = urls.first() else {
            return Ok(None);
        };

        let record: NamedRecord = self.fetcher.fetch_as(first).await?;
        Ok(record.into_name())
    }

    async fn homeworld_name(&self, url: Option<&str>) -> Result<Option<String>, AppError> {
        let Some(url) = url else {
            return Ok(None);
        };

        let record: NamedRecord = self.fetcher.fetch_as(url).await?;
        Ok(record.into_name())
    }

    async fn vehicles(&self, urls: &[String]) -> Result<Option<Vec<Vehicle>>, AppError> {
        if urls.is_empty() {
            return Ok(None);
        }

        let records: Vec<VehicleRecord> = self.fetch_all(urls).await?;
        Ok(Some(records.into_iter().map(Vehicle::from).collect()))
    }

    async fn films(&self, urls: &[String]) -> Result<Option<Vec<Film>>, AppError> {
        if urls.is_empty() {
            return Ok(None);
        }

        let records: Vec<FilmRecord> = self.fetch_all(urls).await?;
        Ok(Some(records.into_iter().map(Film::from).collect()))
    }

    async fn fetch_all<T: DeserializeOwned>(&self, urls: &[String]) -> Result<Vec<T>, AppError> {
        try_join_all(urls.iter().map(|url| self.fetcher.fetch_as::<T>(url))).await
    }
}
