//! Pokeverse - browse the original 151 Pokemon and build a squad
//!
//! This library backs a terminal catalog browser over the public PokéAPI.
//! It supports:
//!
//! - Loading the fixed 151-entry roster (one list request, then concurrent
//!   detail requests joined all-or-nothing)
//! - Case-insensitive substring filtering over the roster
//! - A bounded, duplicate-free squad of up to six members
//! - An interactive TUI with a grid view, a detail view and a squad pane
//!
//! # Example
//!
//! ```no_run
//! use pokeverse::api::{DEFAULT_BASE_URL, PokeClient};
//!
//! # async fn load() -> anyhow::Result<()> {
//! let client = PokeClient::new(DEFAULT_BASE_URL)?;
//! let roster = client.fetch_roster().await?;
//! println!("Loaded {} entries", roster.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod filters;
pub mod models;
pub mod squad;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use api::{DEFAULT_BASE_URL, PokeClient, ROSTER_LIMIT};
pub use filters::filter_by_name;
pub use models::{Pokemon, PokemonRef, RosterPage};
pub use squad::{MAX_SQUAD_SIZE, Squad};
