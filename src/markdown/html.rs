//! Markdown to HTML conversion with comrak.

use comrak::{Arena, Options, format_html, parse_document};

/// Errors raised when a converter breaks its output contract.
///
/// A conversion is a pure function of its input, so none of these are
/// retryable.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The converter failed while writing its output.
    #[error("failed to write HTML output: {0}")]
    Write(#[from] std::io::Error),
    /// The converter produced bytes that are not a UTF-8 string.
    #[error("converter produced non-UTF-8 output: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
    /// Any other contract violation reported by a converter.
    #[error("markdown conversion failed: {0}")]
    Contract(String),
}

/// A synchronous markdown to HTML conversion.
///
/// Implementations must be deterministic: the same input always yields
/// the same output.
pub trait MarkdownConverter {
    /// Convert markdown source to an HTML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] when the converter cannot produce a string.
    fn convert(&self, markdown: &str) -> Result<String, ConvertError>;
}

/// Rendering switches for [`ComrakConverter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Render single newlines as `<br />`.
    pub hard_breaks: bool,
    /// Enable tables, strikethrough, autolinks and task lists.
    pub gfm: bool,
    /// Pass raw HTML through instead of dropping it.
    pub raw_html: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            hard_breaks: true,
            gfm: true,
            raw_html: true,
        }
    }
}

/// The default converter, backed by comrak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComrakConverter {
    options: HtmlOptions,
}

impl ComrakConverter {
    pub const fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> HtmlOptions {
        self.options
    }
}

impl MarkdownConverter for ComrakConverter {
    fn convert(&self, markdown: &str) -> Result<String, ConvertError> {
        let mut options = Options::default();
        options.render.hardbreaks = self.options.hard_breaks;
        options.render.unsafe_ = self.options.raw_html;
        if self.options.gfm {
            options.extension.table = true;
            options.extension.strikethrough = true;
            options.extension.autolink = true;
            options.extension.tasklist = true;
        }

        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &options);
        let mut out = Vec::with_capacity(markdown.len() * 2);
        format_html(root, &options, &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}
