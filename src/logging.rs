//! Tracing subscriber setup.
//!
//! The terminal UI owns stderr's screen, so verbose logging goes to a
//! file. Without a file only warnings and errors reach stderr, and only
//! while the UI is not drawing.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` directives are honored on top of the default level.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter(Level::DEBUG))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
            tracing::info!(path = %path.display(), "logging to file");
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter(Level::WARN))
                .with_writer(stderr_writer)
                .init();
        }
    }
    Ok(())
}

static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Record whether the alternate screen is up.
///
/// While it is, stderr events are dropped; failures still reach the
/// user as toasts.
pub fn set_terminal_active(active: bool) {
    TERMINAL_ACTIVE.store(active, Ordering::Relaxed);
}

fn stderr_suppressed() -> bool {
    TERMINAL_ACTIVE.load(Ordering::Relaxed)
}

fn stderr_writer() -> Box<dyn Write> {
    if stderr_suppressed() {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

fn filter(level: Level) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_is_suppressed_while_terminal_is_active() {
        assert!(!stderr_suppressed());
        set_terminal_active(true);
        assert!(stderr_suppressed());
        set_terminal_active(false);
        assert!(!stderr_suppressed());
    }
}
