//! Data models for the PokéAPI wire format.
//!
//! This module defines the structures the application reads from the remote
//! API:
//!
//! - [`RosterPage`] - Envelope returned by the paginated list endpoint
//! - [`PokemonRef`] - Lightweight `{name, url}` reference to a detail resource
//! - [`Pokemon`] - Full detail record for a single creature
//!
//! The detail schema is a pass-through of the API's JSON: only the fields the
//! application displays are modeled, everything else is ignored during
//! deserialization.

pub mod pokemon;

pub use pokemon::{AbilitySlot, NamedResource, Pokemon, PokemonRef, RosterPage, Sprites, TypeSlot};
