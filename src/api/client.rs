//! Roster loading against the PokéAPI.
//!
//! Loading is a two-phase, all-or-nothing operation:
//!
//! 1. One request for the fixed-size reference list (`/pokemon?limit=151`)
//! 2. One concurrent detail request per reference, joined fail-fast
//!
//! The roster comes back in reference-list order. Any failure - network
//! error, non-success status, unparsable body - fails the whole load; there
//! is no retry and no partial roster.

use std::time::Duration;

use anyhow::{Context, Result};
use futures::future::try_join_all;

use crate::models::{Pokemon, RosterPage};

/// The catalog covers the original 151 creatures
pub const ROSTER_LIMIT: usize = 151;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote catalog API
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeClient {
    /// Create a client against the given API root (no trailing slash needed)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Fetch the full roster: the reference list, then every detail record
    /// concurrently.
    ///
    /// Up to [`ROSTER_LIMIT`] detail requests are in flight at once. The join
    /// is fail-fast: the first error wins and the remaining in-flight
    /// requests are dropped.
    pub async fn fetch_roster(&self) -> Result<Vec<Pokemon>> {
        let url = format!("{}/pokemon?limit={}", self.base_url, ROSTER_LIMIT);
        let page: RosterPage = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to request the roster list")?
            .error_for_status()
            .context("Roster list request was rejected")?
            .json()
            .await
            .context("Failed to parse the roster list")?;

        let details = page.results.iter().map(|reference| self.fetch_detail(&reference.url));
        try_join_all(details).await
    }

    /// Fetch one detail record from its reference URL
    async fn fetch_detail(&self, url: &str) -> Result<Pokemon> {
        self.http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request detail from {url}"))?
            .error_for_status()
            .with_context(|| format!("Detail request to {url} was rejected"))?
            .json()
            .await
            .with_context(|| format!("Failed to parse detail from {url}"))
    }

    /// Fetch a single record by name or dex number (backs the `show` command)
    pub async fn fetch_by_name_or_id(&self, key: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, key.to_lowercase());
        self.http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to look up '{key}'"))?
            .error_for_status()
            .with_context(|| format!("No catalog entry for '{key}'"))?
            .json()
            .await
            .with_context(|| format!("Failed to parse the record for '{key}'"))
    }
}
