//! Tokenizer for joined command-line argument strings.
//!
//! The input is the argument vector joined with single spaces. Tokens are
//! either flags (`-x`, `--xyz`) or bare values, and every token must be
//! bounded by whitespace or the ends of the input. Scanning stops at the
//! first position where no token matches; anything left after that is
//! residual input and is reported through [`Tokenized::residual`] rather
//! than as an error.

use std::sync::LazyLock;

use regex::Regex;

/// Flag (one or two dashes plus a body) or a bare value, anchored at the
/// candidate start. The trailing boundary is checked separately.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(--[^- ]+|-[^- ]+)|([^- ]+))").expect("static regex must compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Dash-prefixed argument name, dashes included.
    Flag { text: String, offset: usize },
    /// Bare value.
    Value { text: String, offset: usize },
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Self::Flag { text, .. } | Self::Value { text, .. } => text,
        }
    }

    /// Byte offset of the token in the scanned input.
    pub fn offset(&self) -> usize {
        match self {
            Self::Flag { offset, .. } | Self::Value { offset, .. } => *offset,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag { .. })
    }
}

/// Tokens scanned from an input plus how far the scan got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    /// Byte offset just past the last matched token.
    pub consumed: usize,
    input_len: usize,
}

impl Tokenized {
    /// Offset of the first unmatched byte, if the scan stopped early.
    pub fn residual(&self) -> Option<usize> {
        (self.consumed < self.input_len).then_some(self.consumed)
    }

    pub fn is_complete(&self) -> bool {
        self.residual().is_none()
    }
}

pub struct ArgLexer;

impl ArgLexer {
    /// Scans `input` left to right until no further token matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlist_args::tokenizer::{ArgLexer, Token};
    ///
    /// let scan = ArgLexer::tokenize("foo --bar baz");
    /// assert!(scan.is_complete());
    /// assert!(matches!(&scan.tokens[1], Token::Flag { text, .. } if text == "--bar"));
    ///
    /// let scan = ArgLexer::tokenize("foo --bar-baz");
    /// assert_eq!(scan.residual(), Some(3));
    /// ```
    pub fn tokenize(input: &str) -> Tokenized {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        while let Some((token, end)) = next_token(input, cursor) {
            tokens.push(token);
            cursor = end;
        }

        Tokenized {
            tokens,
            consumed: cursor,
            input_len: input.len(),
        }
    }
}

/// Matches one token at `cursor`, returning it with the offset just past it.
///
/// Whitespace before the first token is optional; later tokens need at least
/// one whitespace character in front. Longer separators are tried first, and
/// within a token the longest body followed by whitespace or end of input
/// wins.
fn next_token(input: &str, cursor: usize) -> Option<(Token, usize)> {
    let rest = &input[cursor..];
    let separator = rest.len() - rest.trim_start().len();

    let starts = rest[..separator]
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(separator))
        .filter(|&start| cursor == 0 || start > 0);

    for start in starts.rev() {
        let candidate = &rest[start..];
        let Some(caps) = TOKEN.captures(candidate) else {
            continue;
        };
        let (matched, is_flag) = match (caps.get(1), caps.get(2)) {
            (Some(flag), _) => (flag.as_str(), true),
            (None, Some(value)) => (value.as_str(), false),
            (None, None) => continue,
        };

        let body_start = matched.len() - matched.trim_start_matches('-').len();
        let end = matched
            .char_indices()
            .map(|(idx, ch)| idx + ch.len_utf8())
            .filter(|&idx| idx > body_start)
            .rev()
            .find(|&idx| at_boundary(&candidate[idx..]));

        if let Some(end) = end {
            let text = candidate[..end].to_string();
            let offset = cursor + start;
            let token = if is_flag {
                Token::Flag { text, offset }
            } else {
                Token::Value { text, offset }
            };
            return Some((token, offset + end));
        }
    }

    None
}

fn at_boundary(after: &str) -> bool {
    after.chars().next().is_none_or(char::is_whitespace)
}
