//! TUI application state and event handling.
//!
//! The `App` struct owns all session state and runs the main event loop via
//! `run()`:
//!
//! - **Roster**: the loaded records, immutable for the session
//! - **Search**: live case-insensitive substring filter over roster names
//! - **Views**: a grid (filtered list) and a single-record detail view;
//!   navigating between them never resets the search term
//! - **Squad**: the bounded selection store, owned here and passed by
//!   reference to every render function
//! - **Status messages**: transient feedback for squad and clipboard actions
//! - **Dirty state tracking**: rendering only when state changes

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::filters::matches_name;
use crate::models::Pokemon;
use crate::squad::Squad;
use crate::utils::{capitalize, format::summary_card};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Search input cap; catalog names are short
const MAX_SEARCH_LEN: usize = 64;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which pane fills the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Grid,
    /// Detail view focused on one roster index
    Detail(usize),
}

pub struct App {
    roster: Vec<Pokemon>,
    search_query: String,
    selected_idx: usize,
    view: View,
    squad: Squad,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(roster: Vec<Pokemon>) -> Self {
        Self {
            roster,
            search_query: String::new(),
            selected_idx: 0,
            view: View::Grid,
            squad: Squad::new(),
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Roster indices of entries matching the current search term,
    /// recomputed on read
    fn filtered_indices(&self) -> Vec<usize> {
        self.roster
            .iter()
            .enumerate()
            .filter(|(_, p)| matches_name(p, &self.search_query))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Roster index of the entry an action targets: the detail record when
    /// the detail view is open, otherwise the highlighted grid row
    fn focused_roster_index(&self) -> Option<usize> {
        match self.view {
            View::Detail(idx) => Some(idx),
            View::Grid => self.filtered_indices().get(self.selected_idx).copied(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            let indices = self.filtered_indices();
            let entries: Vec<&Pokemon> = indices.iter().map(|&idx| &self.roster[idx]).collect();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let detail = match self.view {
                    View::Detail(idx) => self.roster.get(idx),
                    View::Grid => None,
                };
                terminal.draw(|f| {
                    let state = RenderState {
                        search_query: &self.search_query,
                        total_count: self.roster.len(),
                        squad: &self.squad,
                        status_message: self.status_message.as_ref(),
                        detail,
                    };
                    render_ui(f, &entries, self.selected_idx, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Back => self.go_back(),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::ViewDetails => self.open_details(),
            Action::ToggleSquad => self.toggle_squad(),
            Action::CopyToClipboard => self.copy_focused_entry(),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    /// Esc: leave detail view first, then clear the search, then quit.
    /// Leaving the detail view never touches the search term.
    fn go_back(&mut self) {
        match self.view {
            View::Detail(_) => {
                self.view = View::Grid;
                self.needs_redraw = true;
            }
            View::Grid => {
                if self.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search_query.clear();
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn open_details(&mut self) {
        if self.view != View::Grid {
            return;
        }
        if let Some(idx) = self.focused_roster_index() {
            self.view = View::Detail(idx);
            self.needs_redraw = true;
        }
    }

    fn toggle_squad(&mut self) {
        let Some(idx) = self.focused_roster_index() else {
            return;
        };
        let pokemon = self.roster[idx].clone();
        let display_name = capitalize(&pokemon.name);

        if self.squad.contains(pokemon.id) {
            self.squad.remove(pokemon.id);
            self.set_status(
                format!("✓ Removed {display_name} from squad"),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            );
        } else if self.squad.is_full() {
            // The store would silently reject this; tell the user why
            self.set_status("✗ Squad is full", MessageType::Error, STATUS_ERROR_DURATION_MS);
        } else {
            self.squad.add(pokemon);
            self.set_status(
                format!("✓ Added {display_name} to squad"),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            );
        }
    }

    fn copy_focused_entry(&mut self) {
        let Some(idx) = self.focused_roster_index() else {
            self.set_status("✗ No entry to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        let card = summary_card(&self.roster[idx]);
        match copy_to_clipboard(&card) {
            Ok(()) => {
                self.set_status(
                    "✓ Copied to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.view != View::Grid {
            return;
        }
        let total = self.filtered_indices().len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        // The detail view has no search box
        if self.view != View::Grid {
            return;
        }
        if self.search_query.len() < MAX_SEARCH_LEN {
            self.search_query.push(c);
            self.selected_idx = 0; // Reset selection on search change
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        if self.view != View::Grid {
            return;
        }
        if self.search_query.pop().is_some() {
            self.selected_idx = 0;
            self.needs_redraw = true;
        }
    }
}
