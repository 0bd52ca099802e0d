//! Text block scanner
//!
//! Drives one literal through its two phases:
//!
//! - `discovery` - one-time lookahead that measures the common indentation
//! - `emission` - per-call tokenization using the measured width

mod discovery;
mod emission;

use crate::config::{ConfigError, ScannerConfig};
use crate::cursor::Cursor;
use crate::state::{SERIALIZED_LEN, ScannerState, StateError};
use crate::tokens::{TokenKind, ValidTokens};

// ============================================================================
// SCANNER PHASES
// ----------------------------------------------------------------------------
// Phase diagram:
//
// [Undiscovered] → scan → discovery (lookahead, marker) → [Emitting]
//                                                             ↓
//                                                            scan → ws | content | none
//                                                             ↓
//                                                            reset / deserialize([]) → [Undiscovered]
// ============================================================================

/// Where the scanner is in a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The indentation width is unknown; the next scan runs discovery.
    Undiscovered,
    /// The width is known; scans emit real tokens.
    Emitting,
}

/// Scanner for one text block literal at a time.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    state: ScannerState,
    config: ScannerConfig,
}

impl Scanner {
    /// Create a scanner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with a custom configuration.
    ///
    /// ## Errors
    /// Returns a [`ConfigError`] if the configuration cannot be encoded in the scanner state.
    pub fn with_config(config: ScannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ScannerState::new(),
            config,
        })
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_discovered() {
            Phase::Emitting
        } else {
            Phase::Undiscovered
        }
    }

    /// Forget the current literal; the next scan runs discovery again.
    pub fn reset(&mut self) {
        self.state = ScannerState::new();
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Write the state into `buffer` and return the number of bytes written.
    ///
    /// Hosts provide at least [`SERIALIZED_LEN`] bytes; a shorter buffer receives a truncated prefix.
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        let bytes = self.state.to_bytes();
        let len = SERIALIZED_LEN.min(buffer.len());
        buffer[..len].copy_from_slice(&bytes[..len]);
        len
    }

    /// Restore state written by [`Scanner::serialize`].
    ///
    /// An empty buffer restores the state of a freshly created scanner.
    ///
    /// ## Errors
    /// Returns a [`StateError`] if the bytes were not produced by a scanner with this configuration. The state is
    /// left unchanged in that case.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        self.state = ScannerState::from_bytes(bytes, &self.config)?;
        Ok(())
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    /// Produce the next token at the cursor, if one of the `valid` kinds fits.
    ///
    /// The first call for a literal runs discovery and returns [`TokenKind::Marker`] with the token end marked at
    /// the starting position. Later calls return one real token each. Returns `None` at end of input or when no
    /// acceptable kind applies.
    pub fn scan<C: Cursor>(&mut self, cursor: &mut C, valid: ValidTokens) -> Option<TokenKind> {
        if cursor.is_eof() {
            return None;
        }

        let kind = match self.state.indentation_width() {
            None => Some(self.discover(cursor)),
            Some(width) => self.emit(cursor, valid, width),
        };
        tracing::trace!(kind = ?kind, first_line = self.state.is_first_line(), "scan");
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;
    use crate::tokens::Span;

    /// Drive a scanner over `source` the way the text block grammar does and collect the tokens.
    fn scan_all(scanner: &mut Scanner, source: &str) -> Vec<(TokenKind, String)> {
        let mut cursor = StrCursor::new(source);
        let mut valid = ValidTokens::host();
        let mut tokens = Vec::new();

        loop {
            cursor.begin_token();
            let Some(kind) = scanner.scan(&mut cursor, valid) else {
                break;
            };
            let Span { start, end } = cursor.finish_token();
            valid = match kind {
                TokenKind::IncidentalWs => ValidTokens::content_only(),
                _ => ValidTokens::host(),
            };
            tokens.push((kind, source[start..end].to_string()));
        }
        tokens
    }

    fn ws(text: &str) -> (TokenKind, String) {
        (TokenKind::IncidentalWs, text.to_string())
    }

    fn content(text: &str) -> (TokenKind, String) {
        (TokenKind::Content, text.to_string())
    }

    fn marker() -> (TokenKind, String) {
        (TokenKind::Marker, String::new())
    }

    #[test]
    fn test_fresh_scanner_is_undiscovered() {
        let scanner = Scanner::new();
        assert_eq!(scanner.phase(), Phase::Undiscovered);
        assert_eq!(scanner.state(), &ScannerState::new());
    }

    #[test]
    fn test_strips_common_indentation() {
        let mut scanner = Scanner::new();
        let tokens = scan_all(&mut scanner, "\"\"\"\n  a\n    b\n  c\n");

        assert_eq!(scanner.state().indentation_width(), Some(2));
        assert_eq!(scanner.state().indentation_leader(), Some(' '));
        assert_eq!(
            tokens,
            vec![
                marker(),
                content("\"\"\"\n"),
                ws("  "),
                content("a\n"),
                ws("  "),
                content("  b\n"),
                ws("  "),
                content("c\n"),
            ]
        );
    }

    #[test]
    fn test_blank_line_is_single_fragment() {
        let mut scanner = Scanner::new();
        let tokens = scan_all(&mut scanner, "x\n  a\n\n  b\n");

        assert_eq!(scanner.state().indentation_width(), Some(2));
        assert_eq!(
            tokens,
            vec![
                marker(),
                content("x\n"),
                ws("  "),
                content("a\n"),
                content("\n"),
                ws("  "),
                content("b\n"),
            ]
        );
    }

    #[test]
    fn test_unindented_literal_has_no_whitespace_tokens() {
        let mut scanner = Scanner::new();
        let tokens = scan_all(&mut scanner, "x\na\n  b\n");

        assert_eq!(scanner.state().indentation_width(), Some(0));
        assert_eq!(scanner.state().indentation_leader(), None);
        assert_eq!(tokens, vec![marker(), content("x\n"), content("a\n"), content("  b\n")]);
    }

    #[test]
    fn test_opening_line_only() {
        let mut scanner = Scanner::new();
        let tokens = scan_all(&mut scanner, "just one line");

        assert_eq!(scanner.state().indentation_width(), Some(0));
        assert_eq!(tokens, vec![marker(), content("just one line")]);
    }

    #[test]
    fn test_trailing_indentation_before_eof() {
        let mut scanner = Scanner::new();
        let tokens = scan_all(&mut scanner, "x\n    a\n  ");

        assert_eq!(scanner.state().indentation_width(), Some(2));
        assert_eq!(
            tokens,
            vec![marker(), content("x\n"), ws("  "), content("  a\n"), ws("  ")]
        );
    }

    #[test]
    fn test_eof_yields_no_token() {
        let mut scanner = Scanner::new();
        let mut cursor = StrCursor::new("");
        assert_eq!(scanner.scan(&mut cursor, ValidTokens::host()), None);
        assert_eq!(scanner.phase(), Phase::Undiscovered);
    }

    #[test]
    fn test_no_acceptable_kind_yields_no_token() {
        let mut scanner = Scanner::new();
        let mut cursor = StrCursor::new("x\n  a\n");
        assert_eq!(scanner.scan(&mut cursor, ValidTokens::host()), Some(TokenKind::Marker));
        cursor.finish_token();

        cursor.begin_token();
        assert_eq!(scanner.scan(&mut cursor, ValidTokens::none()), None);
    }

    #[test]
    fn test_whitespace_only_offered_on_first_line_falls_through() {
        let mut scanner = Scanner::new();
        let mut cursor = StrCursor::new("x\n  a\n");
        scanner.scan(&mut cursor, ValidTokens::host());
        cursor.finish_token();

        // The opening line never yields incidental whitespace
        cursor.begin_token();
        let only_ws = ValidTokens::none().with(TokenKind::IncidentalWs);
        assert_eq!(scanner.scan(&mut cursor, only_ws), None);
    }

    #[test]
    fn test_reset_rediscovers() {
        let mut scanner = Scanner::new();
        scan_all(&mut scanner, "x\n    a\n");
        assert_eq!(scanner.phase(), Phase::Emitting);

        scanner.reset();
        assert_eq!(scanner.phase(), Phase::Undiscovered);
        scan_all(&mut scanner, "x\n\ta\n");
        assert_eq!(scanner.state().indentation_width(), Some(1));
        assert_eq!(scanner.state().indentation_leader(), Some('\t'));
    }

    #[test]
    fn test_serialize_reports_written_length() {
        let mut scanner = Scanner::new();
        scan_all(&mut scanner, "x\n  a\n");

        let mut buffer = [0u8; 16];
        let len = scanner.serialize(&mut buffer);
        assert_eq!(len, SERIALIZED_LEN);

        let mut restored = Scanner::new();
        restored.deserialize(&buffer[..len]).unwrap();
        assert_eq!(restored.state(), scanner.state());
    }

    #[test]
    fn test_serialize_truncates_to_short_buffer() {
        let mut scanner = Scanner::new();
        scan_all(&mut scanner, "x\n  a\n");

        let mut buffer = [0u8; 2];
        assert_eq!(scanner.serialize(&mut buffer), 2);
        assert_eq!(buffer, [2, b' ']);

        assert_eq!(scanner.serialize(&mut []), 0);
    }

    #[test]
    fn test_deserialize_empty_restores_fresh_state() {
        let mut scanner = Scanner::new();
        scan_all(&mut scanner, "x\n  a\n");
        scanner.deserialize(&[]).unwrap();
        assert_eq!(scanner.state(), &ScannerState::new());
    }

    #[test]
    fn test_deserialize_error_keeps_state() {
        let mut scanner = Scanner::new();
        scan_all(&mut scanner, "x\n  a\n");
        let before = *scanner.state();

        let err = scanner.deserialize(&[1, 2]).unwrap_err();
        assert!(matches!(err, StateError::Length { .. }));
        assert_eq!(scanner.state(), &before);
    }

    #[test]
    fn test_with_config_validates() {
        assert!(Scanner::with_config(ScannerConfig::new().with_indent_chars(['\n'])).is_err());

        let mut scanner = Scanner::with_config(ScannerConfig::new().with_indent_chars(['.'])).unwrap();
        let tokens = scan_all(&mut scanner, "x\n..a\n...b\n");
        assert_eq!(scanner.state().indentation_leader(), Some('.'));
        assert_eq!(
            tokens,
            vec![marker(), content("x\n"), ws(".."), content("a\n"), ws(".."), content(".b\n")]
        );
    }
}
