#![forbid(unsafe_code)]
//! Incremental scanner for multi-line text block literals.
//!
//! A host parser feeds characters through a [`Cursor`] and asks, at each position, which of the scanner's token
//! kinds it can produce. The scanner answers in two phases:
//!
//! - **Discovery** runs once per literal. It looks ahead over the whole literal to find the common indentation width
//!   and the indentation leader, and reports only a zero-width [`TokenKind::Marker`].
//! - **Emission** runs on every later call and produces alternating [`TokenKind::IncidentalWs`] and
//!   [`TokenKind::Content`] tokens, one per call, until the literal ends.
//!
//! Between calls the host may persist the scanner with [`Scanner::serialize`] and restore it with
//! [`Scanner::deserialize`]; the encoding is three bytes.
//!
//! ## Module Structure
//!
//! - `tokens` - Token kinds, the acceptable-kinds set, spans
//! - `cursor` - The host cursor contract and an in-memory implementation
//! - `state` - Persistent scanner state and its byte encoding
//! - `config` - Scanner configuration (indentation characters)
//! - `scanner` - Phase dispatch, discovery and emission
//!
//! ## Examples
//! ```rust
//! use textblock_scanner::{Scanner, StrCursor, TokenKind, ValidTokens};
//!
//! let mut scanner = Scanner::new();
//! let mut cursor = StrCursor::new("\"\"\"\n  hello\n");
//!
//! cursor.begin_token();
//! assert_eq!(scanner.scan(&mut cursor, ValidTokens::host()), Some(TokenKind::Marker));
//! assert_eq!(scanner.state().indentation_width(), Some(2));
//! ```

pub mod config;
pub mod cursor;
pub mod scanner;
pub mod state;
pub mod tokens;

pub use config::{ConfigError, ScannerConfig};
pub use cursor::{Cursor, StrCursor};
pub use scanner::{Phase, Scanner};
pub use state::{MAX_WIDTH, SERIALIZED_LEN, ScannerState, StateError};
pub use tokens::{Span, TokenKind, ValidTokens};
