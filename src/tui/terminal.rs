//! Raw-mode terminal setup and teardown.

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Puts the terminal into raw mode with the alternate screen and mouse
/// capture. Restores it on drop.
#[derive(Debug)]
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode, the alternate screen and mouse capture.
    ///
    /// If a later step fails the guard is dropped, so whatever was already
    /// switched on is switched off again.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Leaves raw mode and the alternate screen and shows the cursor.
    ///
    /// Every step runs even when an earlier one fails; the first failure is
    /// returned. Later calls do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        debug!("Restoring terminal");
        first_error([
            disable_raw_mode(),
            execute!(io::stdout(), DisableMouseCapture),
            execute!(io::stdout(), LeaveAlternateScreen),
            execute!(io::stdout(), cursor::Show),
        ])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let result = first_error([
            Ok(()),
            Err(io::Error::other("mouse")),
            Err(io::Error::other("screen")),
        ]);
        assert_eq!(result.unwrap_err().to_string(), "mouse");
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_restored_guard_is_not_restored_again() {
        let mut guard = TerminalGuard { restored: true };
        assert!(guard.restore().is_ok());
        drop(guard);
    }
}
