//! Measure / tokenize pipeline
//!
//! The same discovery and emission rules as the scanner, as pure functions over a complete literal. Useful when
//! the whole text is in memory and no incremental host is involved.
//!
//! ## Notes
//! - Lines are `str::split_inclusive('\n')` pieces; a blank line is exactly `"\n"`.
//! - `tokenize` yields what a host offering both kinds at every line start would receive, minus the marker.

use textblock_scanner::{MAX_WIDTH, ScannerConfig, Span, TokenKind};

/// Common indentation of a literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indentation {
    /// Number of leader characters stripped from every line after the first.
    pub width: usize,
    /// Character that indentation is measured in, if the first measured line was indented.
    pub leader: Option<char>,
}

/// A token of a literal with its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

/// Measure the common indentation of `source`.
///
/// The opening line and blank lines are not measured. The first measured line picks the leader; if it does not
/// start with one of the configured indentation characters there is no common indentation.
pub fn measure(source: &str, config: &ScannerConfig) -> Indentation {
    let mut lines = source.split_inclusive('\n').skip(1).skip_while(|line| *line == "\n").peekable();

    let leader = match lines.peek().and_then(|line| line.chars().next()) {
        Some(c) if config.is_indent_char(c) => c,
        _ => return Indentation::default(),
    };

    let width = lines
        .filter(|line| *line != "\n")
        .map(|line| leading_run(line, leader))
        .min()
        .unwrap_or(0);

    Indentation {
        width,
        leader: Some(leader),
    }
}

fn leading_run(line: &str, leader: char) -> usize {
    line.chars().take_while(|c| *c == leader).count().min(usize::from(MAX_WIDTH))
}

/// Split `source` into incidental whitespace and content fragments.
pub fn tokenize(source: &str, indentation: Indentation) -> Fragments<'_> {
    Fragments {
        source,
        pos: 0,
        width: indentation.width,
        first_line: true,
        after_indentation: false,
    }
}

/// Strip the common indentation from `source` using the default indentation characters.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn dedent(source: &str) -> String {
    let indentation = measure(source, &ScannerConfig::default());
    tracing::debug!(width = indentation.width, leader = ?indentation.leader, "measured");
    tokenize(source, indentation)
        .filter(|fragment| fragment.kind == TokenKind::Content)
        .map(|fragment| fragment.text)
        .collect()
}

// ============================================================================
// FRAGMENT ITERATOR
// ============================================================================

/// Lazy iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    source: &'a str,
    pos: usize,
    width: usize,
    first_line: bool,
    after_indentation: bool,
}

impl<'a> Fragments<'a> {
    fn fragment(&mut self, kind: TokenKind, len: usize) -> Fragment<'a> {
        let span = Span::new(self.pos, self.pos + len);
        self.pos = span.end;
        Fragment {
            kind,
            text: &self.source[span.start..span.end],
            span,
        }
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.source.get(self.pos..).filter(|rest| !rest.is_empty())?;

        if !self.after_indentation && !self.first_line && self.width >= 1 {
            if rest.starts_with('\n') {
                return Some(self.fragment(TokenKind::Content, 1));
            }
            self.after_indentation = true;
            let len = rest
                .chars()
                .take_while(|c| *c != '\n')
                .take(self.width)
                .map(char::len_utf8)
                .sum();
            return Some(self.fragment(TokenKind::IncidentalWs, len));
        }

        self.after_indentation = false;
        let len = match rest.find('\n') {
            Some(newline) => {
                self.first_line = false;
                newline + 1
            }
            None => rest.len(),
        };
        Some(self.fragment(TokenKind::Content, len))
    }
}
