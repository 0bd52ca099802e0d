//! Token emission for the text block scanner

use super::Scanner;
use crate::cursor::Cursor;
use crate::tokens::{TokenKind, ValidTokens};

impl Scanner {
    pub(super) fn emit<C: Cursor>(&mut self, cursor: &mut C, valid: ValidTokens, width: u8) -> Option<TokenKind> {
        // Incidental whitespace is never taken from the opening line
        let strips = valid.contains(TokenKind::IncidentalWs) && !self.state.is_first_line() && width >= 1;

        if strips {
            // A blank line has no indentation of its own and is kept whole
            if cursor.lookahead() == Some('\n') {
                cursor.advance(false);
                return Some(TokenKind::Content);
            }
            consume_indentation(cursor, width);
            return Some(TokenKind::IncidentalWs);
        }

        if valid.contains(TokenKind::Content) {
            self.consume_line(cursor);
            return Some(TokenKind::Content);
        }

        None
    }

    fn consume_line<C: Cursor>(&mut self, cursor: &mut C) {
        while let Some(c) = cursor.lookahead() {
            cursor.advance(false);
            if c == '\n' {
                self.state.set_first_line(false);
                break;
            }
        }
    }
}

/// Consume up to `width` characters, stopping at a line terminator or end of input.
///
/// Discovery guarantees every measured line starts with at least `width` leader characters.
fn consume_indentation<C: Cursor>(cursor: &mut C, width: u8) {
    for _ in 0..width {
        match cursor.lookahead() {
            None | Some('\n') => break,
            Some(_) => cursor.advance(false),
        }
    }
}
