//! Schema type definitions for argument parsing.
//!
//! A [`Schema`] maps argument names (long names, short aliases and the
//! reserved [`DEFAULT_CONTEXT`] key) to [`SchemaEntry`] values. Schemas are
//! declared once, either programmatically or from a JSON/YAML document, and
//! are never mutated while a parse runs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved schema key and context name for positional arguments.
pub const DEFAULT_CONTEXT: &str = "$default";

/// Declaration for a single argument name.
///
/// An entry is either a canonical argument (optionally with an arity and
/// descriptive metadata) or an alias that redirects to another entry.
///
/// # Examples
///
/// ```
/// use wordlist_core::SchemaEntry;
///
/// let out = SchemaEntry::scalar().with_description("out file path");
/// assert!(out.is_scalar());
///
/// let o = SchemaEntry::alias_of("out");
/// assert_eq!(o.alias.as_deref(), Some("out"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Canonical name this entry redirects to (single level).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Declared value count. `Some(1)` yields a scalar, anything else a sequence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<usize>,
    /// Display label, used for the positional argument in usage lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declared default value (descriptive only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Whether the argument is documented as required (descriptive only)
    #[serde(default)]
    pub required: bool,
    /// Help text
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaEntry {
    /// Creates an entry that collects every value into a sequence.
    pub fn sequence() -> Self {
        Self::default()
    }

    /// Creates an entry that keeps only the first value (`num = 1`).
    pub fn scalar() -> Self {
        Self {
            num: Some(1),
            ..Self::default()
        }
    }

    /// Creates an alias entry redirecting to `target`.
    pub fn alias_of(target: impl Into<String>) -> Self {
        Self {
            alias: Some(target.into()),
            ..Self::default()
        }
    }

    /// Sets the declared value count.
    pub fn with_num(mut self, num: usize) -> Self {
        self.num = Some(num);
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Sets the display label.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Declares a default value for help output.
    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Marks the argument as required in help output.
    pub fn mark_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns `true` when the entry resolves to a single value.
    pub fn is_scalar(&self) -> bool {
        self.num == Some(1)
    }

    /// Returns `true` when the entry redirects to another name.
    pub fn is_alias(&self) -> bool {
        self.alias.is_some()
    }
}

/// Ordered mapping from argument name to [`SchemaEntry`].
///
/// Deserializes from a plain JSON/YAML object; declaration order is kept so
/// help output lists options the way they were declared.
///
/// # Examples
///
/// ```
/// use wordlist_core::{Schema, SchemaEntry};
///
/// let schema = Schema::new()
///     .with_entry("words", SchemaEntry::sequence())
///     .with_entry("w", SchemaEntry::alias_of("words"));
///
/// assert!(schema.contains("w"));
/// assert!(!schema.has_default());
/// assert_eq!(schema.aliases_of("words"), vec!["w"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: IndexMap<String, SchemaEntry>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    pub fn with_entry(mut self, name: impl Into<String>, entry: SchemaEntry) -> Self {
        self.insert(name, entry);
        self
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: SchemaEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Looks up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns `true` if positional arguments are declared.
    pub fn has_default(&self) -> bool {
        self.contains(DEFAULT_CONTEXT)
    }

    /// Names of every entry aliasing `target`, in declaration order.
    pub fn aliases_of(&self, target: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.alias.as_deref() == Some(target))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SchemaEntry)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, SchemaEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }
}

/// Command metadata used only when formatting help and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    /// Command name shown in usage lines.
    pub command: String,
    /// One-line description printed under diagnostics.
    pub description: String,
}

impl CommandInfo {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_arity() {
        assert!(SchemaEntry::scalar().is_scalar());
        assert!(!SchemaEntry::sequence().is_scalar());
        assert!(!SchemaEntry::sequence().with_num(2).is_scalar());
        assert!(SchemaEntry::sequence().with_num(1).is_scalar());
    }

    #[test]
    fn test_schema_preserves_declaration_order() {
        let schema = Schema::new()
            .with_entry("words", SchemaEntry::sequence())
            .with_entry("exclude", SchemaEntry::sequence())
            .with_entry("out", SchemaEntry::scalar());

        let names: Vec<&str> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["words", "exclude", "out"]);
    }

    #[test]
    fn test_aliases_of_collects_every_alias() {
        let schema = Schema::new()
            .with_entry("out", SchemaEntry::scalar())
            .with_entry("o", SchemaEntry::alias_of("out"))
            .with_entry("output", SchemaEntry::alias_of("out"))
            .with_entry("w", SchemaEntry::alias_of("words"));

        assert_eq!(schema.aliases_of("out"), vec!["o", "output"]);
        assert!(schema.aliases_of("exclude").is_empty());
    }

    #[test]
    fn test_schema_deserializes_desc_shorthand() {
        let schema: Schema = serde_json::from_str(
            r#"{ "$default": { "name": "file", "required": true },
                 "out": { "type": "str", "num": 1, "desc": "out file path" } }"#,
        )
        .expect("schema json");

        assert!(schema.has_default());
        let out = schema.get("out").expect("out entry");
        assert!(out.is_scalar());
        assert_eq!(out.description.as_deref(), Some("out file path"));
        assert!(schema.get(DEFAULT_CONTEXT).is_some_and(|e| e.required));
    }
}
