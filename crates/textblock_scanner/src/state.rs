//! Persistent scanner state.
//!
//! The host stores this state next to the tokens it produced and hands it back after an edit, so the encoding is
//! small and fixed: one byte per field.
//!
//! | Byte | Field | Encoding |
//! |------|-------|----------|
//! | 0 | indentation width | `0xFF` = unknown, otherwise the width |
//! | 1 | indentation leader | `0` = none, otherwise the ASCII leader |
//! | 2 | first-line flag | `0` / `1` |

use crate::config::ScannerConfig;
use thiserror::Error;

/// Number of bytes written by [`ScannerState::to_bytes`].
pub const SERIALIZED_LEN: usize = 3;

/// Largest indentation width the state can hold; longer leader runs count as this.
pub const MAX_WIDTH: u8 = 254;

const UNKNOWN_WIDTH: u8 = 0xFF;
const NO_LEADER: u8 = 0;

/// Persisted state that does not decode into a valid [`ScannerState`].
///
/// Any of these means the host and the scanner disagree about what was stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("expected {expected} state bytes, found {found}")]
    Length { expected: usize, found: usize },

    #[error("leader byte {0:#04x} is not a configured indentation character")]
    Leader(u8),

    #[error("first-line byte must be 0 or 1, found {0}")]
    FirstLine(u8),

    #[error("indentation width {0} recorded without an indentation leader")]
    MissingLeader(u8),
}

/// State carried by the scanner across calls.
///
/// ## Invariants
/// - The width is unknown until discovery completes for the current literal, and stays known afterwards.
/// - Without a leader the width is unknown or zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScannerState {
    width: Option<u8>,
    leader: Option<u8>,
    first_line: bool,
}

impl Default for ScannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScannerState {
    /// State of a freshly created scanner: unknown width, no leader, on the first line.
    pub const fn new() -> Self {
        Self {
            width: None,
            leader: None,
            first_line: true,
        }
    }

    /// Number of leader characters stripped from each line, or `None` before discovery.
    pub fn indentation_width(&self) -> Option<u8> {
        self.width
    }

    /// Character used to measure indentation, if discovery found one.
    pub fn indentation_leader(&self) -> Option<char> {
        self.leader.map(char::from)
    }

    /// Return `true` while the scanner is on the literal's opening line.
    pub fn is_first_line(&self) -> bool {
        self.first_line
    }

    /// Return `true` once discovery has resolved the width.
    pub fn is_discovered(&self) -> bool {
        self.width.is_some()
    }

    pub(crate) fn set_first_line(&mut self, first_line: bool) {
        self.first_line = first_line;
    }

    /// Record the outcome of discovery and rewind to the opening line for emission.
    pub(crate) fn resolve(&mut self, width: u8, leader: Option<u8>) {
        debug_assert!(width <= MAX_WIDTH);
        debug_assert!(leader.is_some() || width == 0);
        self.width = Some(width);
        self.leader = leader;
        self.first_line = true;
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Encode the state as three bytes.
    pub fn to_bytes(&self) -> [u8; SERIALIZED_LEN] {
        [
            self.width.unwrap_or(UNKNOWN_WIDTH),
            self.leader.unwrap_or(NO_LEADER),
            u8::from(self.first_line),
        ]
    }

    /// Decode bytes written by [`ScannerState::to_bytes`].
    ///
    /// An empty buffer means the host has no prior state and yields [`ScannerState::new`].
    ///
    /// ## Errors
    /// Returns a [`StateError`] if the length is wrong or a field is outside its domain for `config`.
    pub fn from_bytes(bytes: &[u8], config: &ScannerConfig) -> Result<Self, StateError> {
        if bytes.is_empty() {
            return Ok(Self::new());
        }
        let &[width, leader, first_line] = bytes else {
            return Err(StateError::Length {
                expected: SERIALIZED_LEN,
                found: bytes.len(),
            });
        };

        let width = (width != UNKNOWN_WIDTH).then_some(width);
        let leader = match leader {
            NO_LEADER => None,
            byte if config.is_indent_char(char::from(byte)) => Some(byte),
            byte => return Err(StateError::Leader(byte)),
        };
        let first_line = match first_line {
            0 => false,
            1 => true,
            byte => return Err(StateError::FirstLine(byte)),
        };
        if let (Some(width @ 1..), None) = (width, leader) {
            return Err(StateError::MissingLeader(width));
        }

        Ok(Self {
            width,
            leader,
            first_line,
        })
    }
}
