//! Word-list generation from word files.
//!
//! Reads every word file, keeps purely alphabetic lines that are not
//! excluded, and groups the lower-cased, de-duplicated words by length.

use std::collections::BTreeMap;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use tracing::{debug, info};
use wordlist_core::ParseResult;

use crate::error::{CorpusError, Result};
use crate::exclude::ExcludeFilter;
use crate::lines::for_each_line;
use crate::paths::expand_paths;

static ALPHA_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("static regex must compile"));

/// Inputs for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Word files or directories of word files.
    pub words: Vec<PathBuf>,
    /// Exclude files or directories of exclude files.
    pub exclude: Vec<PathBuf>,
    /// Output JSON path.
    pub out: PathBuf,
}

impl GenerateOptions {
    /// Reads `words`, `exclude` and `out` from a parse result.
    ///
    /// # Errors
    ///
    /// Returns [`MissingArgument`](CorpusError::MissingArgument) when any of
    /// the three is absent or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlist_core::{ArgValue, ParseResult};
    /// use wordlist_corpus::GenerateOptions;
    ///
    /// let mut args = ParseResult::new();
    /// args.insert("words", ArgValue::Sequence(vec!["dict".into()]));
    /// args.insert("exclude", ArgValue::Sequence(vec!["stop.txt".into()]));
    /// args.insert("out", ArgValue::Scalar(Some("words.json".into())));
    ///
    /// let options = GenerateOptions::from_parse_result(&args).unwrap();
    /// assert_eq!(options.out.to_str(), Some("words.json"));
    /// ```
    pub fn from_parse_result(args: &ParseResult) -> Result<Self> {
        let words = args.sequence("words");
        if words.is_empty() {
            return Err(CorpusError::MissingArgument("no words paths specified"));
        }

        let exclude = args.sequence("exclude");
        if exclude.is_empty() {
            return Err(CorpusError::MissingArgument("no exclude paths specified"));
        }

        let out = args
            .scalar("out")
            .filter(|out| !out.is_empty())
            .ok_or(CorpusError::MissingArgument("no outfile path specified"))?;

        Ok(Self {
            words: words.iter().map(PathBuf::from).collect(),
            exclude: exclude.iter().map(PathBuf::from).collect(),
            out: PathBuf::from(out),
        })
    }
}

/// De-duplicated, lower-cased words in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: IndexSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the lower-cased word; returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words grouped by length, shortest first.
    pub fn length_map(&self) -> BTreeMap<usize, Vec<String>> {
        let mut map: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in &self.words {
            map.entry(word.len()).or_default().push(word.clone());
        }
        map
    }

    /// Number of words per length.
    pub fn length_stats(&self) -> BTreeMap<usize, usize> {
        self.length_map()
            .into_iter()
            .map(|(length, words)| (length, words.len()))
            .collect()
    }

    /// The length map as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.length_map())?)
    }

    /// Writes the length map to `path` as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| CorpusError::io(path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.length_map())?;
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word);
        }
        list
    }
}

/// Builds a word list from the files named in `options`.
///
/// Lines that are not purely ASCII-alphabetic are skipped, as are words the
/// exclusion filter rejects.
///
/// # Errors
///
/// Returns [`IoError`](CorpusError::IoError) for any unreadable path, or
/// [`PatternError`](CorpusError::PatternError) if the exclude patterns do
/// not compile.
pub fn generate(options: &GenerateOptions) -> Result<WordList> {
    let word_paths = expand_paths(&options.words)?;
    let exclude_paths = expand_paths(&options.exclude)?;
    let filter = ExcludeFilter::from_paths(&exclude_paths)?;
    debug!(
        word_files = word_paths.len(),
        exclude_files = exclude_paths.len(),
        "Expanded input paths"
    );

    let mut list = WordList::new();
    let mut excluded = 0usize;
    for_each_line(&word_paths, |line| {
        if !ALPHA_WORD.is_match(line) {
            return;
        }
        if filter.is_excluded(line) {
            excluded += 1;
            return;
        }
        list.insert(line);
    })?;

    info!(words = list.len(), excluded, "Generated word list");
    Ok(list)
}
