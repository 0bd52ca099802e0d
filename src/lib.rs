#![forbid(unsafe_code)]
//! Text block literals with incidental indentation removed.
//!
//! The scanner itself lives in `textblock_scanner` and is re-exported as [`scanner`]. This crate adds what a host
//! needs around it:
//!
//! - `host` - a reference driver for the text block grammar
//!   (`marker? (incidental_ws? content)+ incidental_ws?`), with per-token state snapshots and resumable re-parse
//! - `pipeline` - pure `measure` / `tokenize` functions and `dedent`
//! - `diagnostics` - parse errors with miette source labels
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?`. Persisted scanner state is validated on restore rather
//!   than trusted.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! let block = textblock::parse("\n    fn main() {\n        run();\n    }\n").unwrap();
//! assert_eq!(block.indentation().width, 4);
//! assert_eq!(block.content(), "\nfn main() {\n    run();\n}\n");
//! ```

pub mod diagnostics;
pub mod host;
pub mod pipeline;

pub use textblock_scanner as scanner;
pub use textblock_scanner::{Scanner, ScannerConfig, Span, TokenKind, ValidTokens};

pub use diagnostics::ParseError;
pub use host::{ScanSnapshot, TextBlock, Token, parse, parse_with_config, resume};
pub use pipeline::{Fragment, Fragments, Indentation, dedent, measure, tokenize};
