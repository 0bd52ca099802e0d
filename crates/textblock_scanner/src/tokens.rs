//! Token kinds produced by the text block scanner.
//!
//! ## Notes
//! - Discriminants follow the host's external symbol order: marker, incidental whitespace, content.
//! - `Marker` is never requested by a host; the scanner returns it once per literal, from discovery.

use std::fmt;

// ============================================================================
// TOKEN KINDS
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Zero-width placeholder returned by the discovery pass.
    Marker = 0,
    /// Indentation stripped from the start of a line.
    IncidentalWs = 1,
    /// The rest of a line through its terminator, or a blank line.
    Content = 2,
}

impl TokenKind {
    /// All kinds in symbol order.
    pub const ALL: [TokenKind; 3] = [TokenKind::Marker, TokenKind::IncidentalWs, TokenKind::Content];

    /// Grammar-facing name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Marker => "_marker",
            TokenKind::IncidentalWs => "incidental_ws",
            TokenKind::Content => "content",
        }
    }

    /// Return `true` if the host grammar hides this kind from the tree.
    pub fn is_hidden(self) -> bool {
        matches!(self, TokenKind::Marker)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// ACCEPTABLE KINDS
// ============================================================================

/// Set of token kinds the host is willing to accept at the current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValidTokens(u8);

impl ValidTokens {
    /// The empty set.
    pub const fn none() -> Self {
        Self(0)
    }

    /// The kinds a host offers at the start of a line: incidental whitespace and content.
    pub fn host() -> Self {
        Self::none().with(TokenKind::IncidentalWs).with(TokenKind::Content)
    }

    /// Only content; what a host offers right after an incidental whitespace token.
    pub fn content_only() -> Self {
        Self::none().with(TokenKind::Content)
    }

    /// Build a set from a host valid-symbols array indexed by `TokenKind as usize`.
    ///
    /// Missing trailing entries count as not acceptable.
    pub fn from_flags(flags: &[bool]) -> Self {
        TokenKind::ALL
            .iter()
            .filter(|kind| flags.get(**kind as usize).copied().unwrap_or(false))
            .fold(Self::none(), |set, kind| set.with(*kind))
    }

    /// Return a copy of the set with `kind` added.
    #[must_use]
    pub fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Return `true` if `kind` is acceptable.
    pub fn contains(self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Return `true` if no kind is acceptable.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

// ============================================================================
// SPANS
// ============================================================================

/// Byte range in the scanned source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
