//! Manual stopwatch with a live single-line readout.
//!
//! A session runs from an explicit start until the user stops it (Ctrl+C,
//! Ctrl+D or Esc). While running, the elapsed time is recomputed from the
//! wall clock on every display refresh and rewritten over the previous line;
//! the refresh interval is presentation only and plays no part in the
//! measured result.
//!
//! The wall clock sits behind the [`Clock`] trait so tests can script it and
//! skip the interactive loop entirely.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local, TimeDelta};
use crossterm::event::{self, Event};

use crate::console::{RawModeGuard, is_cancel_key};
use crate::models::format_duration;

/// Display refresh interval for the live readout.
const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Wall-clock source, swappable in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// One measured work session.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkedSession {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub elapsed: TimeDelta,
}

/// A session between `start()` and the stop signal.
#[derive(Debug, Clone, Copy)]
pub struct RunningSession {
    start: DateTime<Local>,
}

impl RunningSession {
    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    /// Elapsed time as observed at `now`.
    pub fn elapsed_at(&self, now: DateTime<Local>) -> TimeDelta {
        now - self.start
    }

    /// Stop the session at `now`.
    pub fn finish_at(self, now: DateTime<Local>) -> WorkedSession {
        WorkedSession { start: self.start, end: now, elapsed: now - self.start }
    }
}

pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Begin a fresh session at the current instant. Sessions share no state;
    /// starting again simply measures from a new instant.
    pub fn start_session(&self) -> RunningSession {
        RunningSession { start: self.clock.now() }
    }

    /// Run interactively until the user stops the watch, printing the live
    /// readout, and return the measured session.
    pub fn run(&self) -> Result<WorkedSession> {
        println!("\nStarting the stopwatch");
        println!("(Ctrl+C, Ctrl+D or Esc stops it)\n");

        let session = self.start_session();
        if io::stdin().is_terminal() { self.run_live(session) } else { self.run_plain(session) }
    }

    fn run_live(&self, session: RunningSession) -> Result<WorkedSession> {
        let guard = RawModeGuard::enable()?;
        let mut stdout = io::stdout();

        loop {
            let elapsed = session.elapsed_at(self.clock.now());
            write!(stdout, "\rTime worked: {}", format_duration(elapsed))?;
            stdout.flush()?;

            if event::poll(REFRESH_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && is_cancel_key(key)
            {
                break;
            }
        }
        drop(guard);

        let finished = session.finish_at(self.clock.now());
        println!("\rTime worked: {}", format_duration(finished.elapsed));
        Ok(finished)
    }

    /// Without a terminal there are no key events to poll; any input line (or
    /// end-of-input) stops the watch. Keeps the binary scriptable.
    fn run_plain(&self, session: RunningSession) -> Result<WorkedSession> {
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;

        let finished = session.finish_at(self.clock.now());
        println!("Time worked: {}", format_duration(finished.elapsed));
        Ok(finished)
    }
}
