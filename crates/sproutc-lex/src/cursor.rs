//! Character cursor for traversing source text.
//!
//! Unlike a general-purpose compiler's cursor, this one does not need to be
//! unicode-identifier-aware — `spec.md` §1 puts UTF-8 classification out of
//! scope, identifier and number classes are ASCII — so this stays a plain
//! byte-position walk over `&str` with `char` accessors for convenience.

/// A cursor over source text, tracking a 0-based line/column per
/// `spec.md` §3 ("line ≥ 0, column ≥ 0").
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 0,
            column: 0,
        }
    }

    /// The character at the cursor, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// The character `offset` characters ahead of the cursor (`0` = current).
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Advances past the current character, bumping `line`/`column`.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// The source slice from `start` (a previously recorded `position()`)
    /// up to the cursor's current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_origin() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.line(), 0);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn advance_tracks_columns() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn newline_bumps_line_and_resets_column() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance_n(2);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn end_of_input_reads_as_nul() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn slice_from_captures_consumed_text() {
        let mut cursor = Cursor::new("hello world");
        let start = cursor.position();
        cursor.advance_n(5);
        assert_eq!(cursor.slice_from(start), "hello");
    }
}
