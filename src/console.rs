//! Ending a run on the console.

use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use log::debug;

use crate::ExitCode;

/// Prints `message` and the exit code to `out`, optionally waits for the ESC key, and returns the
/// numeric code the process should exit with.
///
/// Waiting is skipped when standard input is not a terminal.
pub fn finish<W: Write>(out: &mut W, message: &str, code: ExitCode, wait: bool) -> i32 {
    if !message.is_empty() {
        report(writeln!(out, "{}", message));
    }
    if wait && io::stdin().is_terminal() {
        report(writeln!(out, "Please press ESC to exit ({})!", code));
        report(out.flush());
        if let Err(err) = wait_for_escape() {
            debug!("could not wait for ESC: {}", err);
        }
    }
    report(out.flush());
    code.code()
}

// The process exits right after, so a failed write is only logged.
fn report(result: io::Result<()>) {
    if let Err(err) = result {
        debug!("could not write to the console: {}", err);
    }
}

fn wait_for_escape() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.code == KeyCode::Esc && key.kind == KeyEventKind::Press => {
                break Ok(());
            }
            Ok(_) => {}
            Err(err) => break Err(err),
        }
    };
    terminal::disable_raw_mode()?;
    result
}
