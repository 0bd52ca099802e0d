//! Host cursor contract.
//!
//! The scanner never owns input. Every character it sees comes through a [`Cursor`], which mirrors the lexer
//! interface of incremental parser hosts: a one-character lookahead, an advance that either keeps the character in
//! the token or skips it as insignificant, and a way to pin the token's end before looking further ahead.

use crate::tokens::Span;

/// Character access provided by the host.
pub trait Cursor {
    /// Current lookahead character, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Advance past the lookahead character.
    ///
    /// With `skip` set, the character is treated as insignificant and excluded from the token text.
    fn advance(&mut self, skip: bool);

    /// Record the current position as the provisional end of the token being built.
    ///
    /// Characters advanced over after the last call are looked at but not part of the token; the host resumes
    /// from the marked end.
    fn mark_end(&mut self);

    /// Return `true` at end of input.
    fn is_eof(&self) -> bool {
        self.lookahead().is_none()
    }
}

// ============================================================================
// IN-MEMORY CURSOR
// ----------------------------------------------------------------------------
// Token bookkeeping:
//
// begin_token → [token_start = pos, no mark]
//                    ↓
//                   advance(skip) → token_start moves past skipped chars
//                    ↓
//                   mark_end → end pinned at pos
//                    ↓
// finish_token → span = token_start..end, pos rewinds to end
// ============================================================================

/// [`Cursor`] over an in-memory string, with byte offsets as positions.
#[derive(Debug, Clone)]
pub struct StrCursor<'a> {
    source: &'a str,
    pos: usize,
    token_start: usize,
    marked_end: Option<usize>,
}

impl<'a> StrCursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Create a cursor at byte `offset` of `source`.
    ///
    /// An offset past the end or inside a UTF-8 sequence reads as end of input.
    pub fn at(source: &'a str, offset: usize) -> Self {
        Self {
            source,
            pos: offset,
            token_start: offset,
            marked_end: None,
        }
    }

    /// The scanned source.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Start a new token at the current position.
    pub fn begin_token(&mut self) {
        self.token_start = self.pos;
        self.marked_end = None;
    }

    /// Close the token being built and rewind to its end.
    ///
    /// The end is the last marked position, or the current position if the scanner never marked one.
    pub fn finish_token(&mut self) -> Span {
        let end = self.marked_end.unwrap_or(self.pos);
        let start = self.token_start.min(end);
        self.pos = end;
        self.marked_end = None;
        Span::new(start, end)
    }
}

impl Cursor for StrCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn advance(&mut self, skip: bool) {
        let Some(c) = self.lookahead() else {
            return;
        };
        self.pos += c.len_utf8();
        if skip {
            self.token_start = self.pos;
        }
    }

    fn mark_end(&mut self) {
        self.marked_end = Some(self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_walks_chars() {
        let mut cursor = StrCursor::new("aé\n");
        assert_eq!(cursor.lookahead(), Some('a'));
        cursor.advance(false);
        assert_eq!(cursor.lookahead(), Some('é'));
        cursor.advance(false);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.lookahead(), Some('\n'));
        cursor.advance(false);
        assert!(cursor.is_eof());

        // Advancing at end of input is a no-op
        cursor.advance(false);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_finish_without_mark_ends_at_position() {
        let mut cursor = StrCursor::new("abc");
        cursor.begin_token();
        cursor.advance(false);
        cursor.advance(false);
        assert_eq!(cursor.finish_token(), Span::new(0, 2));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_skipped_chars_excluded_from_token() {
        let mut cursor = StrCursor::new("  ab");
        cursor.begin_token();
        cursor.advance(true);
        cursor.advance(true);
        cursor.advance(false);
        assert_eq!(cursor.finish_token(), Span::new(2, 3));
    }

    #[test]
    fn test_mark_end_rewinds_lookahead() {
        let mut cursor = StrCursor::new("line\nmore\n");
        cursor.begin_token();
        cursor.mark_end();
        for _ in 0..7 {
            cursor.advance(true);
        }
        let span = cursor.finish_token();
        assert_eq!(span, Span::new(0, 0));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.lookahead(), Some('l'));
    }

    #[test]
    fn test_offset_inside_char_reads_as_eof() {
        let cursor = StrCursor::at("é", 1);
        assert!(cursor.is_eof());
    }
}
