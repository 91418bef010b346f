//! Loading schema declarations from JSON or YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! words:
//!   desc: a list of word files to process
//! out:
//!   desc: out file path
//!   num: 1
//! w:
//!   alias: words
//! o:
//!   alias: out
//! ```
//!
//! Unknown keys (such as a `type` tag) are accepted and ignored. Every
//! loader validates aliases and fails with [`SchemaError::Defect`] on the
//! first broken one.

use std::io::BufReader;
use std::path::Path;

use crate::error::{Result, SchemaError};
use crate::{Schema, validate_schema};

impl Schema {
    /// Parses and validates a JSON schema declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlist_core::Schema;
    ///
    /// let schema = Schema::from_json_str(r#"{ "out": { "num": 1 }, "o": { "alias": "out" } }"#)
    ///     .unwrap();
    /// assert!(schema.get("out").unwrap().is_scalar());
    ///
    /// assert!(Schema::from_json_str(r#"{ "x": { "alias": "y" } }"#).is_err());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let schema: Schema = serde_json::from_str(json)?;
        schema.ensure_valid()
    }

    /// Parses and validates a YAML schema declaration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let schema: Schema = serde_yaml::from_str(yaml)?;
        schema.ensure_valid()
    }

    /// Loads a schema file, picking the format from its extension
    /// (`.json`, `.yaml` or `.yml`).
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](SchemaError::IoError) if the file cannot be read,
    /// [`UnsupportedFormat`](SchemaError::UnsupportedFormat) for any other
    /// extension, a parse error, or [`Defect`](SchemaError::Defect).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let schema: Schema = match extension.as_deref() {
            Some("json") => {
                let reader = BufReader::new(std::fs::File::open(path)?);
                serde_json::from_reader(reader)?
            }
            Some("yaml" | "yml") => {
                let reader = BufReader::new(std::fs::File::open(path)?);
                serde_yaml::from_reader(reader)?
            }
            _ => return Err(SchemaError::UnsupportedFormat(path.display().to_string())),
        };
        schema.ensure_valid()
    }

    fn ensure_valid(self) -> Result<Self> {
        match validate_schema(&self).into_iter().next() {
            Some(defect) => Err(defect.into()),
            None => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigurationDefect;

    fn sample_yaml() -> &'static str {
        r#"
words:
  type: str
  desc: a list of word files to process
exclude:
  desc: a list of exclude-word files
out:
  desc: out file path
  num: 1
w:
  alias: words
e:
  alias: exclude
o:
  alias: out
"#
    }

    #[test]
    fn test_from_yaml_str_keeps_order_and_aliases() {
        let schema = Schema::from_yaml_str(sample_yaml()).expect("valid yaml");
        let names: Vec<&str> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["words", "exclude", "out", "w", "e", "o"]);
        assert_eq!(schema.aliases_of("out"), vec!["o"]);
    }

    #[test]
    fn test_from_yaml_str_rejects_broken_alias() {
        let err = Schema::from_yaml_str("x:\n  alias: y\n").unwrap_err();
        match err {
            SchemaError::Defect(ConfigurationDefect::MissingAliasTarget { name, alias }) => {
                assert_eq!(name, "x");
                assert_eq!(alias, "y");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_picks_format_from_extension() {
        let dir = tempfile::tempdir().expect("tempdir");

        let yaml_path = dir.path().join("schema.yml");
        std::fs::write(&yaml_path, sample_yaml()).expect("write yaml");
        assert_eq!(Schema::load(&yaml_path).expect("load yaml").len(), 6);

        let json_path = dir.path().join("schema.json");
        std::fs::write(&json_path, r#"{ "$default": {} }"#).expect("write json");
        assert!(Schema::load(&json_path).expect("load json").has_default());

        let toml_path = dir.path().join("schema.toml");
        std::fs::write(&toml_path, "").expect("write toml");
        assert!(matches!(
            Schema::load(&toml_path),
            Err(SchemaError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = Schema::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(SchemaError::IoError(_))));
    }
}
