//! Exclusion filtering from exclude-word files.
//!
//! Each line of an exclude file is either a plain word or a wildcard
//! pattern:
//!
//! - plain words are lower-cased, the first run of spaces is removed, and
//!   the result is kept if it is purely `a-z`;
//! - pattern words contain `*` and otherwise only letters. A pattern
//!   matches a whole word and each `*` is a non-greedy gap, so `foo*` is a
//!   prefix match, `*bar` a suffix match and `f*r` needs both ends.
//!
//! # Examples
//!
//! ```
//! use wordlist_corpus::exclude::ExcludeFilter;
//!
//! let filter = ExcludeFilter::from_lines(["the", "un*", "*ness", "c*t"]).unwrap();
//! assert!(filter.is_excluded("The"));
//! assert!(filter.is_excluded("undo"));
//! assert!(filter.is_excluded("kindness"));
//! assert!(filter.is_excluded("cart"));
//! assert!(!filter.is_excluded("cartoon"));
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::lines::for_each_line;

static LOWER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+$").expect("static regex must compile"));
static PATTERN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z*]+$").expect("static regex must compile"));
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("static regex must compile"));

/// Predicate over words built from exclude files.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    words: HashSet<String>,
    patterns: IndexSet<String>,
    matcher: Option<Regex>,
}

impl ExcludeFilter {
    /// Reads every line of the given exclude files.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut filter = Self::default();
        for_each_line(paths, |line| filter.push_line(line))?;
        filter.compile()
    }

    /// Builds a filter from in-memory exclude lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for line in lines {
            filter.push_line(line.as_ref());
        }
        filter.compile()
    }

    /// Returns `true` if `word` (compared lower-cased) is an excluded word
    /// or matches any pattern.
    pub fn is_excluded(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.contains(&word)
            || self
                .matcher
                .as_ref()
                .is_some_and(|matcher| matcher.is_match(&word))
    }

    /// Number of distinct plain words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct wildcard patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    fn push_line(&mut self, line: &str) {
        let lower = line.to_lowercase();

        let word = SPACE_RUN.replacen(&lower, 1, "");
        if LOWER_WORD.is_match(&word) {
            self.words.insert(word.into_owned());
        }

        if lower.contains('*') && PATTERN_WORD.is_match(&lower) {
            self.patterns.insert(patternize(&lower));
        }
    }

    fn compile(mut self) -> Result<Self> {
        if !self.patterns.is_empty() {
            let combined = self
                .patterns
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("|");
            self.matcher = Some(Regex::new(&combined)?);
        }
        debug!(
            words = self.words.len(),
            patterns = self.patterns.len(),
            "Compiled exclusion filter"
        );
        Ok(self)
    }
}

/// Turns a pattern word into an anchored regex with `*` as a lazy gap.
fn patternize(word: &str) -> String {
    let body = word
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*?");
    format!("^{body}$")
}
