//! Reference host for the text block grammar.
//!
//! Drives a [`Scanner`] the way an incremental LR parser would for the rule
//!
//! ```text
//! text := marker? (incidental_ws? content)+ incidental_ws?
//! ```
//!
//! At a line start both real kinds are acceptable; right after incidental whitespace only content is. Every
//! token keeps the scanner state serialized after it, so a later parse can resume from any token boundary.

use crate::diagnostics::ParseError;
use crate::pipeline::{Fragment, Indentation};
use textblock_scanner::{Cursor, SERIALIZED_LEN, Scanner, ScannerConfig, Span, StrCursor, TokenKind, ValidTokens};

/// Scanner state as serialized after a token.
pub type ScanSnapshot = [u8; SERIALIZED_LEN];

/// A token produced while parsing a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Scanner state right after this token was produced.
    pub snapshot: ScanSnapshot,
}

/// A parsed text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    indentation: Indentation,
}

impl<'a> TextBlock<'a> {
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// All tokens, including the zero-width marker.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn indentation(&self) -> Indentation {
        self.indentation
    }

    /// Source text covered by `token`.
    pub fn text(&self, token: &Token) -> &'a str {
        self.source.get(token.span.start..token.span.end).unwrap_or_default()
    }

    /// Tokens other than the marker, with their text.
    pub fn fragments(&self) -> impl Iterator<Item = Fragment<'a>> + '_ {
        self.tokens
            .iter()
            .filter(|token| !token.kind.is_hidden())
            .map(|token| Fragment {
                kind: token.kind,
                text: self.text(token),
                span: token.span,
            })
    }

    /// The literal with incidental whitespace removed.
    pub fn content(&self) -> String {
        self.fragments()
            .filter(|fragment| fragment.kind == TokenKind::Content)
            .map(|fragment| fragment.text)
            .collect()
    }
}

/// Parse `source` as a text block with the default configuration.
///
/// ## Errors
/// Returns [`ParseError::Empty`] for a literal without content, or another [`ParseError`] if the scanner cannot
/// make progress.
pub fn parse(source: &str) -> Result<TextBlock<'_>, ParseError> {
    parse_with_config(source, &ScannerConfig::default())
}

/// Parse `source` as a text block.
///
/// ## Errors
/// See [`parse`]; additionally returns [`ParseError::Config`] for an invalid configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_with_config<'a>(source: &'a str, config: &ScannerConfig) -> Result<TextBlock<'a>, ParseError> {
    let scanner = Scanner::with_config(config.clone())?;
    Driver::new(source, scanner, 0, Vec::new()).run()
}

/// Re-parse `source` starting at token `index` of an earlier parse.
///
/// Tokens before `index` are kept as they are; the scanner is restored from the snapshot of the token just before
/// it, the way an incremental host restarts after an edit. The caller guarantees that `source` is unchanged up
/// to the start of token `index`. An `index` past the end resumes after the last token.
///
/// ## Errors
/// Returns [`ParseError::ResumeOffset`] if the kept tokens end past `source` or inside a character, and
/// [`ParseError::State`] if a snapshot does not decode under `config`, plus everything [`parse`] returns.
#[tracing::instrument(skip_all, fields(source_len = source.len(), index))]
pub fn resume<'a>(
    source: &'a str,
    block: &TextBlock<'_>,
    index: usize,
    config: &ScannerConfig,
) -> Result<TextBlock<'a>, ParseError> {
    let index = index.min(block.tokens.len());
    let mut scanner = Scanner::with_config(config.clone())?;

    let offset = match index.checked_sub(1).and_then(|previous| block.tokens.get(previous)) {
        Some(previous) => {
            scanner.deserialize(&previous.snapshot)?;
            previous.span.end
        }
        None => 0,
    };
    if !source.is_char_boundary(offset) {
        return Err(ParseError::resume_offset(offset, source.len()));
    }

    Driver::new(source, scanner, offset, block.tokens[..index].to_vec()).run()
}

// ============================================================================
// DRIVER
// ============================================================================

struct Driver<'a> {
    cursor: StrCursor<'a>,
    scanner: Scanner,
    tokens: Vec<Token>,
}

impl<'a> Driver<'a> {
    fn new(source: &'a str, scanner: Scanner, offset: usize, tokens: Vec<Token>) -> Self {
        Self {
            cursor: StrCursor::at(source, offset),
            scanner,
            tokens,
        }
    }

    /// Kinds the grammar accepts after the tokens produced so far.
    fn valid(&self) -> ValidTokens {
        match self.tokens.last() {
            Some(token) if token.kind == TokenKind::IncidentalWs => ValidTokens::content_only(),
            _ => ValidTokens::host(),
        }
    }

    fn run(mut self) -> Result<TextBlock<'a>, ParseError> {
        while !self.cursor.is_eof() {
            let offset = self.cursor.position();
            let valid = self.valid();
            self.cursor.begin_token();

            let kind = self
                .scanner
                .scan(&mut self.cursor, valid)
                .ok_or_else(|| ParseError::no_token(offset))?;
            let span = self.cursor.finish_token();

            if kind == TokenKind::Marker && !self.tokens.is_empty() {
                return Err(ParseError::unexpected_marker(offset));
            }

            let mut snapshot = [0u8; SERIALIZED_LEN];
            self.scanner.serialize(&mut snapshot);
            self.tokens.push(Token { kind, span, snapshot });
        }

        if !self.tokens.iter().any(|token| token.kind == TokenKind::Content) {
            return Err(ParseError::Empty);
        }

        let state = self.scanner.state();
        let indentation = Indentation {
            width: state.indentation_width().map_or(0, usize::from),
            leader: state.indentation_leader(),
        };
        tracing::debug!(tokens = self.tokens.len(), width = indentation.width, "text block parsed");

        Ok(TextBlock {
            source: self.cursor.source(),
            tokens: self.tokens,
            indentation,
        })
    }
}
