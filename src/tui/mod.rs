// TUI module for the interactive catalog browser
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::models::Pokemon;

/// Run the interactive TUI over a loaded roster
pub fn run_interactive(roster: Vec<Pokemon>) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(roster);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
