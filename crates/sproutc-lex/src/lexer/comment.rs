//! Whitespace and line-comment skipping.

use crate::cursor::Cursor;

/// Skips whitespace and `;`-to-end-of-line comments. Newlines inside either
/// are what actually bump the cursor's line counter; this function just
/// repeats "skip one run of trivia" until neither applies.
pub(super) fn skip_trivia(cursor: &mut Cursor<'_>) {
    loop {
        if cursor.current_char().is_whitespace() {
            while !cursor.is_at_end() && cursor.current_char().is_whitespace() {
                cursor.advance();
            }
            continue;
        }
        if cursor.current_char() == ';' {
            while !cursor.is_at_end() && cursor.current_char() != '\n' {
                cursor.advance();
            }
            continue;
        }
        break;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_whitespace_and_comments_together() {
        let mut cursor = Cursor::new("   ; a comment\n  x");
        skip_trivia(&mut cursor);
        assert_eq!(cursor.current_char(), 'x');
    }

    #[test]
    fn a_trailing_comment_and_its_newline_are_both_skipped() {
        let mut cursor = Cursor::new("; trailing\n");
        skip_trivia(&mut cursor);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn a_comment_does_not_swallow_the_next_line() {
        let mut cursor = Cursor::new("; c\nx");
        skip_trivia(&mut cursor);
        assert_eq!(cursor.current_char(), 'x');
    }
}
