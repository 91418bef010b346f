//! Core schema types and parse results for the wordlist argument engine.
//!
//! This crate defines the data model shared by the parser and its callers:
//!
//! - [`Schema`], an ordered mapping from argument name to [`SchemaEntry`],
//!   including short aliases and the reserved [`DEFAULT_CONTEXT`] key.
//! - [`SchemaEntry`], the arity (`num`), alias redirection and descriptive
//!   metadata for one name.
//! - [`CommandInfo`], the command name and description used in help output.
//! - [`ParseResult`] and [`ArgValue`], the mapping a successful parse yields.
//!
//! Validation ([`validate_schema`]) catches aliases that point at undeclared
//! names. Schemas can also be loaded from JSON or YAML ([`Schema::load`]).
//!
//! # Example
//!
//! ```
//! use wordlist_core::*;
//!
//! let schema = Schema::new()
//!     .with_entry("words", SchemaEntry::sequence().with_description("word files"))
//!     .with_entry("out", SchemaEntry::scalar())
//!     .with_entry("w", SchemaEntry::alias_of("words"))
//!     .with_entry("o", SchemaEntry::alias_of("out"));
//!
//! assert!(validate_schema(&schema).is_empty());
//! assert!(schema.get("out").unwrap().is_scalar());
//! ```

mod error;
mod load;
mod result;
mod types;
mod validate;

pub use error::{Result, SchemaError};
pub use result::{ArgValue, ParseResult};
pub use types::*;
pub use validate::{ConfigurationDefect, validate_schema};
