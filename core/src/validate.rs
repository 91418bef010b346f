//! Schema validation.
//!
//! A schema whose alias points at an undeclared name is an authoring bug,
//! not bad user input. [`validate_schema`] reports every such defect up
//! front; the parser raises the same [`ConfigurationDefect`] lazily when a
//! broken alias is actually used.
//!
//! # Examples
//!
//! ```
//! use wordlist_core::*;
//!
//! let schema = Schema::new()
//!     .with_entry("words", SchemaEntry::sequence())
//!     .with_entry("w", SchemaEntry::alias_of("words"));
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Invalid: alias target is not declared
//! let bad = Schema::new().with_entry("x", SchemaEntry::alias_of("y"));
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use thiserror::Error;

use crate::Schema;

/// Defects in a schema declaration.
///
/// These must never be turned into help output: they propagate to the
/// caller as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationDefect {
    /// An entry's alias names an entry that does not exist.
    #[error("alias not found for \"{name}:{alias}\"")]
    MissingAliasTarget { name: String, alias: String },
}

/// Validates every alias in a schema.
///
/// Returns one [`ConfigurationDefect`] per broken alias, in declaration
/// order.
pub fn validate_schema(schema: &Schema) -> Vec<ConfigurationDefect> {
    schema
        .iter()
        .filter_map(|(name, entry)| {
            let alias = entry.alias.as_deref()?;
            (!schema.contains(alias)).then(|| ConfigurationDefect::MissingAliasTarget {
                name: name.to_string(),
                alias: alias.to_string(),
            })
        })
        .collect()
}
