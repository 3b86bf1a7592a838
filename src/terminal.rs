use anyhow::Context;
use crossterm::{
    cursor,
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Stdout, Write};

/// RAII guard for raw mode and the alternate screen. Dropping it restores
/// the terminal even when the render loop bails with an error.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        // Raw mode is on from here; construct the guard before the screen
        // setup so a failure below still restores the terminal.
        let guard = Self { _private: () };
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
        )
        .context("set up alternate screen")?;
        Ok(guard)
    }

    pub fn stdout() -> Stdout {
        stdout()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let mut out = stdout();
        // The renderer may have left sync-output or autowrap toggled.
        let _ = out.write_all(b"\x1b[?2026l\x1b[?7h\x1b[0m");
        let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
    }
}
