//! HTTP client for the remote creature catalog.

pub mod client;

pub use client::{DEFAULT_BASE_URL, PokeClient, ROSTER_LIMIT};
