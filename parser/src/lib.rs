//! Schema-driven command-line argument parsing.
//!
//! This crate turns a joined argument string into a [`ParseResult`] using a
//! declarative [`Schema`]. It handles flags, short aliases, positional
//! arguments, multi-value collection and scalar-vs-sequence arity.
//!
//! # Pipeline
//!
//! 1. [`tokenizer`] splits the string into flag and value tokens and
//!    reports any residual, unmatched input.
//! 2. [`context`] folds tokens into per-flag contexts, resolving names
//!    through [`resolve`].
//! 3. [`transform`] turns contexts into the final mapping.
//! 4. [`diagnostics`] formats help and error text.
//!
//! User mistakes (unknown flags, stray positional values, malformed input,
//! help requests) never fail: they yield [`ParseOutcome::Help`] or
//! [`ParseOutcome::Invalid`]. A broken alias in the schema is a programming
//! error and is returned as `Err(ConfigurationDefect)`.
//!
//! # Example
//!
//! ```
//! use wordlist_args::{ArgParser, ParseOutcome};
//! use wordlist_core::{CommandInfo, Schema, SchemaEntry};
//!
//! let parser = ArgParser::new()
//!     .with_info(CommandInfo::new("words", "create a word list structure from files"))
//!     .with_schema(
//!         Schema::new()
//!             .with_entry("words", SchemaEntry::sequence())
//!             .with_entry("out", SchemaEntry::scalar())
//!             .with_entry("w", SchemaEntry::alias_of("words"))
//!             .with_entry("o", SchemaEntry::alias_of("out")),
//!     );
//!
//! let result = parser.parse("-w a.txt b.txt -o out.json").unwrap().into_result().unwrap();
//! assert_eq!(result.sequence("words"), &["a.txt".to_string(), "b.txt".to_string()]);
//! assert_eq!(result.scalar("out"), Some("out.json"));
//!
//! let outcome = parser.parse("--nope").unwrap();
//! assert!(matches!(outcome, ParseOutcome::Invalid(ref msg) if msg.contains("invalid argument \"nope\"")));
//! ```
//!
//! [`ParseResult`]: wordlist_core::ParseResult
//! [`Schema`]: wordlist_core::Schema

pub mod context;
pub mod diagnostics;
pub mod resolve;
pub mod tokenizer;
pub mod transform;

mod outcome;

use tracing::{debug, warn};
use wordlist_core::{CommandInfo, ConfigurationDefect, ParseResult, Schema};

use context::build_contexts;
use diagnostics::{help_message, help_text, residual_message};
use resolve::ScanError;
use tokenizer::ArgLexer;
use transform::transform;

pub use outcome::ParseOutcome;

/// Argument parser configured with optional command info and schema.
///
/// The parser holds no per-parse state and can be reused for any number of
/// inputs.
#[derive(Debug, Clone, Default)]
pub struct ArgParser {
    info: Option<CommandInfo>,
    schema: Option<Schema>,
}

impl ArgParser {
    /// Creates a parser with no schema; every flag name is accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command info used in help and diagnostics.
    pub fn with_info(mut self, info: CommandInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Restricts and shapes parsing with a schema.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn info(&self) -> Option<&CommandInfo> {
        self.info.as_ref()
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Parses a joined argument string.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationDefect`] when a flag resolves through an
    /// alias whose target is not declared. All user-input problems are
    /// reported through the returned [`ParseOutcome`] instead.
    pub fn parse(&self, input: &str) -> Result<ParseOutcome, ConfigurationDefect> {
        let scan = ArgLexer::tokenize(input);
        let schema = self.schema.as_ref();
        let info = self.info.as_ref();
        debug!(
            tokens = scan.tokens.len(),
            consumed = scan.consumed,
            residual = ?scan.residual(),
            "Tokenized arguments"
        );

        let contexts = match build_contexts(&scan.tokens, schema) {
            Ok(contexts) => contexts,
            Err(ScanError::Defect(defect)) => return Err(defect),
            Err(ScanError::HelpRequested) => {
                return Ok(ParseOutcome::Help(help_text(info, schema)));
            }
            Err(err) => {
                debug!(error = %err, "Rejected arguments");
                return Ok(ParseOutcome::Invalid(help_message(
                    Some(&err.to_string()),
                    info,
                )));
            }
        };

        if let Some(offset) = scan.residual() {
            debug!(offset, "Unmatched input after last token");
            return Ok(ParseOutcome::Invalid(help_message(
                Some(&residual_message(input, offset)),
                info,
            )));
        }

        Ok(ParseOutcome::Parsed(transform(contexts, schema)))
    }

    /// Joins `args` with single spaces and parses the result.
    pub fn parse_args<I, S>(&self, args: I) -> Result<ParseOutcome, ConfigurationDefect>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.parse(&joined)
    }

    /// Parses the process arguments (program name excluded), printing help
    /// or diagnostics to standard error.
    ///
    /// Returns `Ok(None)` when there is nothing to act on.
    pub fn parse_env(&self) -> Result<Option<ParseResult>, ConfigurationDefect> {
        let outcome = self.parse_args(std::env::args().skip(1))?;
        match outcome.report(&mut std::io::stderr().lock()) {
            Ok(result) => Ok(result),
            Err(err) => {
                warn!(error = %err, "Failed to write diagnostics");
                Ok(None)
            }
        }
    }
}
