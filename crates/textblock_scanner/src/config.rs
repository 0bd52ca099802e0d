//! Scanner configuration

use thiserror::Error;

/// Errors from validating a [`ScannerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one indentation character is required")]
    NoIndentChars,

    #[error("indentation character {0:?} is not ASCII")]
    NonAscii(char),

    #[error("indentation character {0:?} is reserved")]
    Reserved(char),
}

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Characters that may become a literal's indentation leader
    pub indent_chars: Vec<char>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            indent_chars: vec![' ', '\t'],
        }
    }
}

impl ScannerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation characters
    pub fn with_indent_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.indent_chars = chars.into_iter().collect();
        self
    }

    /// Return `true` if `c` may lead indentation.
    pub fn is_indent_char(&self, c: char) -> bool {
        self.indent_chars.contains(&c)
    }

    /// Check that every indentation character fits the one-byte state encoding.
    ///
    /// The leader is persisted as a single byte where `0` means "no leader", so characters must be ASCII and not
    /// NUL. A line terminator can never lead indentation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_chars.is_empty() {
            return Err(ConfigError::NoIndentChars);
        }
        for &c in &self.indent_chars {
            if !c.is_ascii() {
                return Err(ConfigError::NonAscii(c));
            }
            if c == '\0' || c == '\n' {
                return Err(ConfigError::Reserved(c));
            }
        }
        Ok(())
    }
}
