use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_CONTEXT;

/// Value collected for one canonical argument name.
///
/// Serializes untagged: a scalar becomes a string (or `null` when the flag
/// was given without a value) and a sequence becomes an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// First value of an entry declared with `num = 1`.
    Scalar(Option<String>),
    /// Every value collected, in input order.
    Sequence(Vec<String>),
}

impl ArgValue {
    /// Returns the scalar value, if this is a non-empty scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => value.as_deref(),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the collected values, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(values) => Some(values),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

/// Final mapping produced by a successful parse.
///
/// Keys are canonical argument names; the positional arguments live under
/// [`DEFAULT_CONTEXT`]. Inserting an existing name replaces its value but
/// keeps its original position.
///
/// # Examples
///
/// ```
/// use wordlist_core::{ArgValue, ParseResult};
///
/// let mut result = ParseResult::new();
/// result.insert("out", ArgValue::Scalar(Some("words.json".into())));
/// result.insert("words", ArgValue::Sequence(vec!["a.txt".into()]));
///
/// assert_eq!(result.scalar("out"), Some("words.json"));
/// assert_eq!(result.sequence("words"), &["a.txt".to_string()]);
/// assert!(result.sequence("exclude").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseResult {
    values: IndexMap<String, ArgValue>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any earlier value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) -> Option<ArgValue> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Scalar value for `name`; `None` when absent, empty, or a sequence.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgValue::as_scalar)
    }

    /// Sequence for `name`; empty when absent or a scalar.
    pub fn sequence(&self, name: &str) -> &[String] {
        self.get(name)
            .and_then(ArgValue::as_sequence)
            .unwrap_or_default()
    }

    /// Positional arguments.
    pub fn positional(&self) -> &[String] {
        self.sequence(DEFAULT_CONTEXT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ArgValue)> for ParseResult {
    fn from_iter<I: IntoIterator<Item = (K, ArgValue)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (name, value) in iter {
            result.insert(name, value);
        }
        result
    }
}
