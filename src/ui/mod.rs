//! Console front end: a numbered menu over stdin/stdout.

mod helpers;
mod menu;

use std::io::{self, IsTerminal};

use anyhow::Result;
use rusqlite::Connection;

#[cfg(test)]
pub(crate) use helpers::surface_error;
pub use menu::Menu;

/// Run the menu against the process's stdin and stdout until the user exits.
pub fn run_app(conn: &Connection) -> Result<()> {
    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    Menu::new(conn, io::stdin().lock(), stdout.lock())
        .styled(styled)
        .run()
}
