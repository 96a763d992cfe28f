/// Character, word and line counts for a markdown buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Unicode scalar values in the text.
    pub characters: usize,
    /// Maximal runs of characters that are not [`is_separator`].
    pub words: usize,
    /// Newline characters plus one.
    pub lines: usize,
}

impl Statistics {
    /// Compute statistics for `text`.
    ///
    /// ```
    /// use mdpad::controller::Statistics;
    ///
    /// let stats = Statistics::of("hello  world\n");
    /// assert_eq!((stats.characters, stats.words, stats.lines), (13, 2, 2));
    /// ```
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split(is_separator).filter(|w| !w.is_empty()).count(),
            lines: text.matches('\n').count() + 1,
        }
    }
}

/// Whitespace for word counting and blank checks.
///
/// Unicode whitespace plus the byte order mark, which stray editors and
/// clipboards leave at the start of text.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
