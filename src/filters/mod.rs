//! Name filtering over the loaded roster.
//!
//! The filtered view is derived, never cached: it is recomputed from the
//! immutable roster and the current search term on every read. Matching is a
//! case-insensitive substring test, so `"char"` matches charmander,
//! charmeleon and charizard, and the empty term is the identity.

use crate::models::Pokemon;

/// Case-insensitive substring test of `term` against the entry's name
pub fn matches_name(pokemon: &Pokemon, term: &str) -> bool {
    pokemon.name.to_lowercase().contains(&term.to_lowercase())
}

/// Filter the roster by case-insensitive substring match on name,
/// preserving roster order.
pub fn filter_by_name<'a>(roster: &'a [Pokemon], term: &str) -> Vec<&'a Pokemon> {
    roster.iter().filter(|p| matches_name(p, term)).collect()
}
