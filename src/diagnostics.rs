//! Diagnostics for text block parsing
//!
//! Errors carry miette codes and source labels so a host can render them against the literal.

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use textblock_scanner::{ConfigError, StateError};
use thiserror::Error;

/// Errors from driving the scanner over a text block.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("text block has no content")]
    #[diagnostic(
        code(textblock::empty),
        help("the grammar requires at least one content fragment after the opening delimiter")
    )]
    Empty,

    /// The scanner produced nothing before end of input. Only reachable for hosts that narrow the valid set;
    /// the reference host always offers content.
    #[error("no token can be scanned at offset {offset}")]
    #[diagnostic(code(textblock::no_token))]
    NoToken {
        offset: usize,
        #[label("scanner stopped here")]
        span: SourceSpan,
    },

    #[error("indentation marker after the first token at offset {offset}")]
    #[diagnostic(
        code(textblock::unexpected_marker),
        help("the restored scanner state has no indentation width; resume from a snapshot of the same parse")
    )]
    UnexpectedMarker {
        offset: usize,
        #[label("discovery ran again here")]
        span: SourceSpan,
    },

    #[error("cannot resume at offset {offset} of a {source_len}-byte source")]
    #[diagnostic(
        code(textblock::resume_offset),
        help("the kept tokens must end inside the new source, on a character boundary")
    )]
    ResumeOffset {
        offset: usize,
        source_len: usize,
        #[label("resume point")]
        span: SourceSpan,
    },

    #[error("invalid scanner configuration: {0}")]
    #[diagnostic(code(textblock::config))]
    Config(#[from] ConfigError),

    #[error("invalid scanner state: {0}")]
    #[diagnostic(code(textblock::state))]
    State(#[from] StateError),
}

impl ParseError {
    pub(crate) fn no_token(offset: usize) -> Self {
        Self::NoToken {
            offset,
            span: (offset, 0).into(),
        }
    }

    pub(crate) fn unexpected_marker(offset: usize) -> Self {
        Self::UnexpectedMarker {
            offset,
            span: (offset, 0).into(),
        }
    }

    pub(crate) fn resume_offset(offset: usize, source_len: usize) -> Self {
        Self::ResumeOffset {
            offset,
            source_len,
            span: (offset.min(source_len), 0).into(),
        }
    }

    /// Byte offset the error points at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::NoToken { offset, .. }
            | Self::UnexpectedMarker { offset, .. }
            | Self::ResumeOffset { offset, .. } => Some(*offset),
            Self::Empty | Self::Config(_) | Self::State(_) => None,
        }
    }

    /// Attach the scanned source so the report renders labels in context.
    pub fn into_report(self, name: &str, source: &str) -> Report {
        Report::new(self).with_source_code(NamedSource::new(name, source.to_string()))
    }
}
