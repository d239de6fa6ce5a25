//! Mock JokeAPI server for hermetic contract tests
//!
//! Speaks the documented wire format with canned bodies so the suite runs
//! without touching the public deployment

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// In-process JokeAPI replica returning predictable responses
pub struct MockJokeApi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    request_count: AtomicU32,
    joke_count: AtomicU32,
}

impl MockJokeApi {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            joke_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route("/joke/{category}", routing::get(handle_joke))
            .route("/languages", routing::get(handle_languages))
            .route("/langcode/{language}", routing::get(handle_langcode))
            .route("/flags", routing::get(handle_flags))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for pointing a client at the mock
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Total requests received across all endpoints
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Requests received by the joke endpoint
    pub fn joke_count(&self) -> u32 {
        self.state.joke_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockJokeApi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Handlers --

/// Deterministic joke per category so both body shapes get exercised:
/// Any and Programming serve a single joke, Dark and Misc a twopart one
async fn handle_joke(
    State(state): State<Arc<MockState>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    state.joke_count.fetch_add(1, Ordering::Relaxed);

    let clean_flags = json!({
        "nsfw": false, "religious": false, "political": false,
        "racist": false, "sexist": false, "explicit": false
    });

    let body = match category.as_str() {
        "Any" | "Programming" => json!({
            "error": false,
            "category": "Programming",
            "type": "single",
            "joke": "A SQL query walks into a bar, walks up to two tables and asks: 'Can I join you?'",
            "flags": clean_flags,
            "id": 183,
            "safe": true,
            "lang": "en"
        }),
        "Dark" => json!({
            "error": false,
            "category": "Dark",
            "type": "twopart",
            "setup": "Why did the server cross the road?",
            "delivery": "It didn't. It timed out halfway.",
            "flags": {
                "nsfw": true, "religious": false, "political": false,
                "racist": false, "sexist": false, "explicit": false
            },
            "id": 77,
            "safe": false,
            "lang": "en"
        }),
        "Misc" => json!({
            "error": false,
            "category": "Misc",
            "type": "twopart",
            "setup": "What's the best thing about Switzerland?",
            "delivery": "I don't know, but the flag is a big plus.",
            "flags": clean_flags,
            "id": 42,
            "safe": true,
            "lang": "en"
        }),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_body(
                    106,
                    "No matching joke found",
                    &format!("The joke category \"{category}\" is invalid"),
                )),
            );
        }
    };

    (StatusCode::OK, Json(body))
}

async fn handle_languages(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    // Joke and system languages deliberately listed out of sorted order;
    // the contract requires set comparison
    Json(json!({
        "defaultLanguage": "en",
        "jokeLanguages": ["de", "cs", "es", "en", "fr", "pt"],
        "systemLanguages": ["cs", "de", "en", "it", "ru"],
        "possibleLanguages": [
            { "code": "cs", "name": "Czech" },
            { "code": "de", "name": "German" },
            { "code": "en", "name": "English" },
            { "code": "es", "name": "Spanish" },
            { "code": "fr", "name": "French" },
            { "code": "it", "name": "Italian" },
            { "code": "pt", "name": "Portuguese" },
            { "code": "ru", "name": "Russian" }
        ]
    }))
}

async fn handle_langcode(
    State(state): State<Arc<MockState>>,
    Path(language): Path<String>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let code = match language.as_str() {
        "English" => "en",
        "German" => "de",
        "Spanish" => "es",
        "French" => "fr",
        "Portuguese" => "pt",
        "Czech" => "cs",
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_body(
                    102,
                    "Invalid language",
                    &format!("The language \"{language}\" could not be resolved"),
                )),
            );
        }
    };

    (StatusCode::OK, Json(json!({ "error": false, "code": code })))
}

async fn handle_flags(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    Json(json!({
        "error": false,
        "flags": ["nsfw", "religious", "political", "racist", "sexist", "explicit"],
        "timestamp": epoch_millis()
    }))
}

fn error_body(code: u32, message: &str, caused_by: &str) -> serde_json::Value {
    json!({
        "error": true,
        "internalError": false,
        "code": code,
        "message": message,
        "causedBy": [caused_by],
        "additionalInfo": message,
        "timestamp": epoch_millis()
    })
}

fn epoch_millis() -> u64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch");
    u64::try_from(elapsed.as_millis()).expect("epoch millis fit in u64")
}
