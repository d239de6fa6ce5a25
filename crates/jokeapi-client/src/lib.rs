#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the JokeAPI v2 service
//!
//! Models the service's closed value sets (categories, languages, joke types,
//! content flags) as enums with exhaustive wire mappings, and exposes the four
//! read-only endpoints (`joke/{category}`, `languages`, `langcode/{language}`,
//! `flags`) as typed operations

mod client;
pub mod error;
pub mod types;

pub use client::{JokeApiClient, PUBLIC_BASE_URL};
pub use error::{JokeApiError, Result};
pub use types::*;
