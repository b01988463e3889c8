#![allow(dead_code)]

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router, ServiceExt};
use character_catalog::infrastructure::cache::MemoryCache;
use character_catalog::infrastructure::persistence::{connect, run_migrations};
use character_catalog::infrastructure::upstream::ReqwestTransport;
use character_catalog::state::AppState;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// In-memory favorites database with migrations applied.
pub async fn memory_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn insert_user(pool: &SqlitePool, id: i64) {
    sqlx::query("INSERT INTO users (id, full_name) VALUES (?, ?)")
        .bind(id)
        .bind(format!("User {}", id))
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_favorites(pool: &SqlitePool, user_id: i64, character_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE user_id = ? AND character_id = ?")
        .bind(user_id)
        .bind(character_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Local stand-in for the upstream character API.
pub struct FakeUpstream {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeUpstream {
    /// Total requests the fake has served.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct FakeState {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl FakeState {
    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base, path)
    }
}

async fn count_hits(State(state): State<FakeState>, request: Request, next: Next) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

fn person(state: &FakeState, id: &str) -> Option<Value> {
    let record = match id {
        "1" => json!({
            "name": "Luke Skywalker",
            "birth_year": "19BBY",
            "gender": "male",
            "species": [],
            "homeworld": state.url("planets/1/"),
            "vehicles": [state.url("vehicles/14/")],
            "starships": [state.url("starships/12/")],
            "films": [state.url("films/1/"), state.url("films/2/")],
            "url": state.url("people/1/")
        }),
        "2" => json!({
            "name": "C-3PO",
            "birth_year": "112BBY",
            "gender": "n/a",
            "species": [state.url("species/2/"), state.url("species/3/")],
            "homeworld": state.url("planets/1/"),
            "vehicles": [],
            "starships": [],
            "films": [state.url("films/1/")],
            "url": state.url("people/2/")
        }),
        "5" => json!({
            "name": "Leia Organa",
            "birth_year": "19BBY",
            "gender": "female",
            "species": [],
            "homeworld": state.url("planets/2/"),
            "vehicles": [],
            "starships": [],
            "films": [],
            "url": state.url("people/5/")
        }),
        _ => return None,
    };
    Some(record)
}

async fn people(State(state): State<FakeState>) -> Json<Value> {
    let results: Vec<Value> = ["1", "2"]
        .iter()
        .filter_map(|id| person(&state, id))
        .collect();
    Json(json!({ "count": results.len(), "next": null, "results": results }))
}

async fn person_detail(State(state): State<FakeState>, Path(id): Path<String>) -> Response {
    match person(&state, &id) {
        Some(record) => Json(record).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found" }))).into_response(),
    }
}

async fn planet(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(json!({ "name": "Tatooine" })).into_response(),
        "2" => Json(json!({ "name": "Alderaan" })).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn species(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "2" => Json(json!({ "name": "Droid" })).into_response(),
        "3" => Json(json!({ "name": "Wookie" })).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn vehicle(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "14" => Json(json!({
            "name": "Snowspeeder",
            "manufacturer": "Incom corporation",
            "model": "t-47 airspeeder"
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn starship(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "12" => Json(json!({
            "name": "X-wing",
            "manufacturer": "Incom Corporation",
            "model": "T-65 X-wing"
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn film(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "1" => Json(json!({
            "title": "A New Hope",
            "release_date": "1977-05-25",
            "director": "George Lucas"
        }))
        .into_response(),
        "2" => Json(json!({
            "title": "The Empire Strikes Back",
            "release_date": "1980-05-17",
            "director": "Irvin Kershner"
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Starts the fake upstream on an ephemeral local port.
pub async fn spawn_fake_upstream() -> FakeUpstream {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    let hits = Arc::new(AtomicUsize::new(0));
    let state = FakeState {
        base: base_url.clone(),
        hits: hits.clone(),
    };

    let app = Router::new()
        .route("/api/people", get(people))
        .route("/api/people/{id}", get(person_detail))
        .route("/api/planets/{id}", get(planet))
        .route("/api/species/{id}", get(species))
        .route("/api/vehicles/{id}", get(vehicle))
        .route("/api/starships/{id}", get(starship))
        .route("/api/films/{id}", get(film))
        .layer(middleware::from_fn_with_state(state.clone(), count_hits))
        .with_state(state);
    // Record links end with a slash, like the real API.
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .await
            .unwrap();
    });

    FakeUpstream { base_url, hits }
}

/// Application state wired to the given pool and upstream.
pub fn create_test_state(pool: SqlitePool, upstream_base_url: &str) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(ReqwestTransport::new().unwrap()),
        Arc::new(MemoryCache::new(3600)),
        upstream_base_url,
        3600,
    )
}
