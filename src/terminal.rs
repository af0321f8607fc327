// Entering and leaving the full-screen terminal mode.
//
// `leave` is safe to call more than once and never fails, so it can run from
// the panic hook as well as on the normal exit path.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::panic;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn enter() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    enter_mode(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn enter_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, Hide)
}

pub fn leave<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Hand the terminal back to a child process (e.g. an interactive shell).
pub fn suspend(terminal: &mut Tui) {
    leave(terminal.backend_mut());
}

pub fn resume(terminal: &mut Tui) -> io::Result<()> {
    enter_mode(terminal.backend_mut())?;
    terminal.clear()
}

/// Restore the terminal before the default hook prints the panic message.
pub fn install_panic_hook() {
    let original = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave(&mut io::stdout());
        original(info);
    }));
}
