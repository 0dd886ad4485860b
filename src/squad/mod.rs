//! The squad: a bounded, ordered, duplicate-free selection of creatures.
//!
//! The squad is owned explicitly (by the TUI `App` or a CLI command) and
//! every consumer reads it through its public operations; there is no shared
//! global. All operations are total: a duplicate add, an add against a full
//! squad and a remove of an absent id are silent no-ops rather than errors.

use crate::models::Pokemon;

/// Maximum number of squad members
pub const MAX_SQUAD_SIZE: usize = 6;

/// Bounded, insertion-ordered, duplicate-free selection
#[derive(Debug, Clone, Default)]
pub struct Squad {
    members: Vec<Pokemon>,
}

impl Squad {
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    /// Add a member. No-op if the id is already present or the squad is full.
    pub fn add(&mut self, pokemon: Pokemon) {
        if self.contains(pokemon.id) || self.is_full() {
            return;
        }
        self.members.push(pokemon);
    }

    /// Remove the member with the given id. No-op if absent.
    pub fn remove(&mut self, id: u32) {
        self.members.retain(|member| member.id != id);
    }

    /// Membership test by id
    pub fn contains(&self, id: u32) -> bool {
        self.members.iter().any(|member| member.id == id)
    }

    /// Open slots, clamped at 0
    pub fn remaining_slots(&self) -> usize {
        MAX_SQUAD_SIZE.saturating_sub(self.members.len())
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_SQUAD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Members in insertion order
    pub fn members(&self) -> &[Pokemon] {
        &self.members
    }
}
