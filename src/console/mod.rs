//! Interrupt-aware console prompts.
//!
//! Every prompt in the shell reads through [`read_line`], which returns
//! `Ok(None)` when the user cancels instead of answering. On a terminal the
//! line is read key by key in raw mode so Ctrl+C, Ctrl+D and Esc cancel the
//! prompt without touching the rest of the process; with piped input it falls
//! back to plain buffered lines and treats end-of-input as cancellation.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Enables raw mode for the lifetime of the value.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

// Ensure the terminal is restored even on panic or early return.
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Best effort cleanup - ignore errors since we may already be unwinding
        let _ = disable_raw_mode();
    }
}

/// Print `prompt` and read one line of input.
///
/// Returns `Ok(None)` when the user cancels (Ctrl+C / Ctrl+D / Esc on a
/// terminal, end-of-input otherwise).
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    if io::stdin().is_terminal() { read_line_raw() } else { read_line_buffered() }
}

/// Ask for confirmation until the answer is recognizable.
///
/// `y`, `yes` and an empty answer accept; `n` and `no` decline; anything else
/// asks again. `Ok(None)` means the prompt itself was cancelled.
pub fn confirm() -> Result<Option<bool>> {
    loop {
        let Some(answer) = read_line("Confirm ([Y]/n): ")? else {
            return Ok(None);
        };
        if let Some(accepted) = parse_confirmation(&answer) {
            return Ok(Some(accepted));
        }
    }
}

/// Interpret one confirmation answer; `None` means unrecognizable.
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn read_line_buffered() -> Result<Option<String>> {
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_line_raw() -> Result<Option<String>> {
    let guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();
    let mut line = String::new();

    let outcome = loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if is_cancel_key(key) {
            break None;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => break Some(line),
            (KeyCode::Backspace, _) => {
                if line.pop().is_some() {
                    write!(stdout, "\x08 \x08")?;
                    stdout.flush()?;
                }
            }
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                line.push(c);
                write!(stdout, "{c}")?;
                stdout.flush()?;
            }
            _ => {}
        }
    };

    drop(guard);
    println!();
    Ok(outcome)
}

/// The keys that abort the current prompt or stop the stopwatch.
pub fn is_cancel_key(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('d'), KeyModifiers::CONTROL)
            | (KeyCode::Esc, _)
    )
}
