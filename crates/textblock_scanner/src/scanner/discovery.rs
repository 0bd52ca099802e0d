//! Indentation discovery for the text block scanner
//!
//! Measures the common indentation of a literal by looking ahead over all of it. Everything here advances with
//! `skip` after marking the token end at the starting position, so the host resumes where discovery began.

use super::Scanner;
use crate::cursor::Cursor;
use crate::state::MAX_WIDTH;
use crate::tokens::TokenKind;

impl Scanner {
    pub(super) fn discover<C: Cursor>(&mut self, cursor: &mut C) -> TokenKind {
        cursor.mark_end();

        // The opening line shares its source line with the delimiter and is not measured
        self.skip_opening_line(cursor);
        skip_blank_lines(cursor);

        let leader = match cursor.lookahead() {
            Some(c) if self.config.is_indent_char(c) => u8::try_from(c).ok(),
            _ => None,
        };
        let Some(leader) = leader else {
            tracing::debug!(width = 0, "no incidental indentation");
            self.state.resolve(0, None);
            return TokenKind::Marker;
        };

        let mut min_width: Option<u8> = None;
        while !cursor.is_eof() {
            if cursor.lookahead() == Some('\n') {
                cursor.advance(true);
                continue;
            }

            let width = count_run(cursor, char::from(leader));
            let min = min_width.map_or(width, |current| current.min(width));
            min_width = Some(min);
            if min == 0 {
                break;
            }
            skip_line(cursor);
        }

        let width = min_width.unwrap_or(0);
        tracing::debug!(width, leader = ?char::from(leader), "incidental indentation discovered");
        self.state.resolve(width, Some(leader));
        TokenKind::Marker
    }

    fn skip_opening_line<C: Cursor>(&mut self, cursor: &mut C) {
        while self.state.is_first_line() {
            match cursor.lookahead() {
                None => break,
                Some('\n') => {
                    cursor.advance(true);
                    self.state.set_first_line(false);
                }
                Some(_) => cursor.advance(true),
            }
        }
    }
}

/// Skip lines consisting of nothing but their terminator.
fn skip_blank_lines<C: Cursor>(cursor: &mut C) {
    while cursor.lookahead() == Some('\n') {
        cursor.advance(true);
    }
}

/// Skip a run of `leader` characters and return its length, capped at [`MAX_WIDTH`].
fn count_run<C: Cursor>(cursor: &mut C, leader: char) -> u8 {
    let mut width: u8 = 0;
    while cursor.lookahead() == Some(leader) {
        cursor.advance(true);
        width = width.saturating_add(1).min(MAX_WIDTH);
    }
    width
}

/// Skip the rest of the line through its terminator.
fn skip_line<C: Cursor>(cursor: &mut C) {
    while let Some(c) = cursor.lookahead() {
        cursor.advance(true);
        if c == '\n' {
            break;
        }
    }
}
