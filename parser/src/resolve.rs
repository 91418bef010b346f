//! Name resolution and positional-value checks against a schema.

use thiserror::Error;
use tracing::debug;
use wordlist_core::{ConfigurationDefect, Schema};

use crate::context::ArgumentContext;

/// Reasons a scan stops before producing contexts.
///
/// Everything except [`ScanError::Defect`] is user input and ends up as help
/// or diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// `-h`, `--help` or any other dash form of `h`/`help`.
    #[error("help requested")]
    HelpRequested,
    #[error("invalid argument \"{0}\"")]
    InvalidArgument(String),
    #[error("invalid positional argument \"{0}\"")]
    InvalidPositional(String),
    /// Broken alias in the schema.
    #[error(transparent)]
    Defect(#[from] ConfigurationDefect),
}

impl ScanError {
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Defect(_))
    }
}

/// Resolves a flag token to its canonical name.
///
/// Help flags are recognised before any schema lookup. With a schema, the
/// name must be declared, and an alias is followed exactly one level.
///
/// # Examples
///
/// ```
/// use wordlist_args::resolve::{ScanError, resolve_name};
/// use wordlist_core::{Schema, SchemaEntry};
///
/// let schema = Schema::new()
///     .with_entry("words", SchemaEntry::sequence())
///     .with_entry("w", SchemaEntry::alias_of("words"));
///
/// assert_eq!(resolve_name("-w", Some(&schema)).unwrap(), "words");
/// assert_eq!(resolve_name("--anything", None).unwrap(), "anything");
/// assert_eq!(resolve_name("--help", Some(&schema)), Err(ScanError::HelpRequested));
/// ```
pub fn resolve_name(raw: &str, schema: Option<&Schema>) -> Result<String, ScanError> {
    let name = raw.trim_start_matches('-');

    if matches!(name, "help" | "h") {
        return Err(ScanError::HelpRequested);
    }

    let Some(schema) = schema else {
        return Ok(name.to_string());
    };

    let entry = schema
        .get(name)
        .ok_or_else(|| ScanError::InvalidArgument(name.to_string()))?;

    let canonical = match entry.alias.as_deref() {
        Some(alias) if schema.contains(alias) => alias,
        Some(alias) => {
            return Err(ConfigurationDefect::MissingAliasTarget {
                name: name.to_string(),
                alias: alias.to_string(),
            }
            .into());
        }
        None => name,
    };

    debug!(raw = %raw, canonical = %canonical, "Resolved argument name");
    Ok(canonical.to_string())
}

/// Rejects a positional value when the schema declares no positional
/// arguments. Values are not checked against any type.
pub fn check_positional_value(
    value: &str,
    context: &ArgumentContext,
    schema: Option<&Schema>,
) -> Result<(), ScanError> {
    match schema {
        Some(schema) if context.is_default() && !schema.has_default() => {
            Err(ScanError::InvalidPositional(value.to_string()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use wordlist_core::SchemaEntry;

    use super::*;

    fn sample_schema() -> Schema {
        Schema::new()
            .with_entry("out", SchemaEntry::scalar())
            .with_entry("o", SchemaEntry::alias_of("out"))
            .with_entry("x", SchemaEntry::alias_of("y"))
    }

    #[test]
    fn test_resolve_name_follows_alias() {
        let schema = sample_schema();
        assert_eq!(resolve_name("-o", Some(&schema)).unwrap(), "out");
        assert_eq!(resolve_name("--o", Some(&schema)).unwrap(), "out");
        assert_eq!(resolve_name("--out", Some(&schema)).unwrap(), "out");
    }

    #[test]
    fn test_resolve_name_help_precedes_schema() {
        let schema = sample_schema();
        for raw in ["-h", "--h", "-help", "--help"] {
            assert_eq!(resolve_name(raw, Some(&schema)), Err(ScanError::HelpRequested));
            assert_eq!(resolve_name(raw, None), Err(ScanError::HelpRequested));
        }
    }

    #[test]
    fn test_resolve_name_rejects_unknown() {
        let err = resolve_name("--verbose", Some(&sample_schema())).unwrap_err();
        assert_eq!(err, ScanError::InvalidArgument("verbose".to_string()));
        assert_eq!(err.to_string(), "invalid argument \"verbose\"");
        assert!(!err.is_defect());
    }

    #[test]
    fn test_resolve_name_missing_alias_target_is_defect() {
        let err = resolve_name("-x", Some(&sample_schema())).unwrap_err();
        assert!(err.is_defect());
        assert_eq!(err.to_string(), "alias not found for \"x:y\"");
    }

    #[test]
    fn test_check_positional_value() {
        let schema = sample_schema();
        let default = ArgumentContext::positional();
        let out = ArgumentContext::new("out");

        assert_eq!(
            check_positional_value("loose", &default, Some(&schema)),
            Err(ScanError::InvalidPositional("loose".to_string()))
        );
        assert!(check_positional_value("a.json", &out, Some(&schema)).is_ok());
        assert!(check_positional_value("loose", &default, None).is_ok());

        let with_default = schema.with_entry("$default", SchemaEntry::sequence());
        assert!(check_positional_value("loose", &default, Some(&with_default)).is_ok());
    }
}
