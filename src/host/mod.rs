//! Clipboard and paste collaborators.
//!
//! The app talks to the outside world only through [`Clipboard`] and
//! [`PasteTarget`], so tests can substitute the in-memory versions.

use std::io::{self, Write, stdout};

use base64::Engine;

/// Places text on the system clipboard.
pub trait Clipboard {
    /// Copy `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the clipboard could not be reached.
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// Hands text to whatever consumes this program's output.
pub trait PasteTarget {
    /// Deliver `text` for insertion.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the text could not be written.
    fn paste(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard using `pbcopy` on macOS and OSC 52 everywhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard {
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    force_osc52: bool,
}

impl SystemClipboard {
    /// Always use the OSC 52 escape sequence, even where `pbcopy` exists.
    pub const fn with_osc52(mut self, force: bool) -> Self {
        self.force_osc52 = force;
        self
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        #[cfg(target_os = "macos")]
        {
            if !self.force_osc52 && copy_to_pbcopy(text).is_ok() {
                return Ok(());
            }
        }
        copy_to_clipboard_osc52(text)
    }
}

#[cfg(target_os = "macos")]
fn copy_to_pbcopy(text: &str) -> io::Result<()> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy").stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other("pbcopy failed"))
    }
}

fn copy_to_clipboard_osc52(text: &str) -> io::Result<()> {
    let mut out = stdout();
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

pub(crate) fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

/// Writes pasted text to standard output.
///
/// Only call this after the terminal has been restored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutPaste;

impl PasteTarget for StdoutPaste {
    fn paste(&mut self, text: &str) -> io::Result<()> {
        let mut out = stdout().lock();
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

/// Clipboard that records every copy, for tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub copies: Vec<String>,
    /// When set, every copy fails with this message.
    pub fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.copies.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(io::Error::other(message.clone()));
        }
        self.copies.push(text.to_string());
        Ok(())
    }
}

/// Paste target that records every paste, for tests.
#[derive(Debug, Default)]
pub struct MemoryPaste {
    pub pasted: Vec<String>,
}

impl PasteTarget for MemoryPaste {
    fn paste(&mut self, text: &str) -> io::Result<()> {
        self.pasted.push(text.to_string());
        Ok(())
    }
}
