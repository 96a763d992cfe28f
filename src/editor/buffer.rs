use ropey::Rope;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope with a single cursor.
///
/// The cursor is a char index into the rope. Vertical movement keeps a
/// sticky column so moving through a short line does not lose it.
///
/// Every line break ropey recognizes is stored as `\n`, so the rope's
/// line count always equals the newline count plus one.
pub struct EditorBuffer {
    rope: Rope,
    cursor: usize,
    sticky_col: Option<usize>,
}

impl EditorBuffer {
    /// Create a buffer from a string with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(&normalize_line_breaks(text));
        let cursor = rope.len_chars();
        Self {
            rope,
            cursor,
            sticky_col: None,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Total number of lines. An empty buffer has one line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its line ending.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(line.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Cursor position as zero-based (line, column) in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.cursor);
        (line, self.cursor - self.rope.line_to_char(line))
    }

    pub fn insert_char(&mut self, ch: char) {
        let ch = if is_line_break(ch) { '\n' } else { ch };
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
        self.sticky_col = None;
    }

    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let text = normalize_line_breaks(text);
        self.rope.insert(self.cursor, &text);
        self.cursor += text.chars().count();
        self.sticky_col = None;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.rope.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        self.sticky_col = None;
        true
    }

    /// Delete the character at the cursor (Delete).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(self.cursor..=self.cursor);
        self.sticky_col = None;
        true
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.cursor = 0;
        self.sticky_col = None;
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                self.sticky_col = None;
            }
            Direction::Right => {
                self.cursor = (self.cursor + 1).min(self.rope.len_chars());
                self.sticky_col = None;
            }
            Direction::Up => {
                let (line, col) = self.cursor_position();
                if line > 0 {
                    self.move_to_line(line - 1, col);
                }
            }
            Direction::Down => {
                let (line, col) = self.cursor_position();
                if line + 1 < self.line_count() {
                    self.move_to_line(line + 1, col);
                }
            }
        }
    }

    /// Move the cursor to the beginning of the line (Home).
    pub fn move_home(&mut self) {
        let (line, _) = self.cursor_position();
        self.cursor = self.rope.line_to_char(line);
        self.sticky_col = None;
    }

    /// Move the cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        let (line, _) = self.cursor_position();
        self.cursor = self.rope.line_to_char(line) + self.line_len(line);
        self.sticky_col = None;
    }

    fn move_to_line(&mut self, line: usize, col: usize) {
        let wanted = *self.sticky_col.get_or_insert(col);
        self.cursor = self.rope.line_to_char(line) + wanted.min(self.line_len(line));
    }

    /// Length of a line in chars, excluding its line ending.
    fn line_len(&self, line: usize) -> usize {
        self.line_at(line).map_or(0, |text| text.chars().count())
    }
}

/// Line terminators other than `\n` that ropey splits lines on.
const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace(is_line_break, "\n")
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
        assert_eq!(buf.cursor_position(), (0, 0));
    }

    #[test]
    fn test_from_text_places_cursor_at_end() {
        let buf = EditorBuffer::from_text("hello\nworld");
        assert_eq!(buf.cursor_position(), (1, 5));
    }

    #[test]
    fn test_insert_and_delete_back() {
        let mut buf = EditorBuffer::empty();
        buf.insert_str("héllo");
        buf.insert_char('!');
        assert_eq!(buf.text(), "héllo!");
        assert!(buf.delete_back());
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "héll");
    }

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut buf = EditorBuffer::empty();
        assert!(!buf.delete_back());
    }

    #[test]
    fn test_delete_back_joins_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_home();
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor_position(), (0, 2));
    }

    #[test]
    fn test_delete_forward() {
        let mut buf = EditorBuffer::from_text("abc");
        assert!(!buf.delete_forward());
        buf.move_home();
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "bc");
    }

    #[test]
    fn test_insert_multiline_moves_cursor() {
        let mut buf = EditorBuffer::empty();
        buf.insert_str("one\ntwo");
        assert_eq!(buf.cursor_position(), (1, 3));
        assert_eq!(buf.line_count(), 2);
    }

    #[test]
    fn test_vertical_movement_keeps_sticky_column() {
        let mut buf = EditorBuffer::from_text("long line\nab\nanother line");
        buf.move_cursor(Direction::Up);
        buf.move_cursor(Direction::Up);
        buf.move_end();
        assert_eq!(buf.cursor_position(), (0, 9));
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor_position(), (1, 2));
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor_position(), (2, 9));
    }

    #[test]
    fn test_horizontal_movement_wraps_lines() {
        let mut buf = EditorBuffer::from_text("a\nb");
        buf.move_home();
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor_position(), (0, 1));
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor_position(), (1, 0));
    }

    #[test]
    fn test_movement_clamps_at_edges() {
        let mut buf = EditorBuffer::from_text("x");
        buf.move_cursor(Direction::Right);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor_position(), (0, 1));
        buf.move_home();
        buf.move_cursor(Direction::Left);
        buf.move_cursor(Direction::Up);
        assert_eq!(buf.cursor_position(), (0, 0));
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut buf = EditorBuffer::from_text("text\nmore");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor_position(), (0, 0));
    }

    #[test]
    fn test_crlf_is_stored_as_newline() {
        let buf = EditorBuffer::from_text("a\r\nb\rc");
        assert_eq!(buf.text(), "a\nb\nc");
        assert_eq!(buf.line_at(0), Some("a".to_string()));
    }

    #[test]
    fn test_unicode_line_separators_become_newlines() {
        let mut buf = EditorBuffer::empty();
        buf.insert_str("ab\u{2028}cd\u{85}ef\u{c}gh");
        assert_eq!(buf.text(), "ab\ncd\nef\ngh");
        assert_eq!(buf.line_count(), 4);
        assert_eq!(buf.cursor_position(), (3, 2));

        buf.insert_char('\u{2029}');
        assert_eq!(buf.line_count(), 5);
    }

    #[test]
    fn test_end_stays_on_line_after_pasted_separator() {
        let mut buf = EditorBuffer::empty();
        buf.insert_str("ab\u{2028}cd");
        buf.move_cursor(Direction::Up);
        buf.move_home();
        buf.move_end();
        assert_eq!(buf.cursor_position(), (0, 2));
        buf.insert_char('X');
        assert_eq!(buf.text(), "abX\ncd");
    }
}
