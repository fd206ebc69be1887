//! Scoped ownership of the interactive terminal.

use ratatui::DefaultTerminal;
use std::{
    io,
    ops::{Deref, DerefMut},
};

/// Holds the terminal in raw mode on the alternate screen for as long as
/// it lives. Dropping it restores the terminal, including on early returns
/// and error propagation.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn acquire() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        log::debug!("terminal acquired");
        Ok(Self { terminal })
    }
}

impl Deref for TerminalSession {
    type Target = DefaultTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        log::debug!("terminal restored");
    }
}
