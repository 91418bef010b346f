//! Folding tokens into argument contexts.

use wordlist_core::{DEFAULT_CONTEXT, Schema};

use crate::resolve::{ScanError, check_positional_value, resolve_name};
use crate::tokenizer::Token;

/// Raw values collected for one flag occurrence (or the positional slot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentContext {
    /// Canonical name after alias resolution.
    pub name: String,
    pub values: Vec<String>,
}

impl ArgumentContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// The implicit context that collects positional arguments.
    pub fn positional() -> Self {
        Self::new(DEFAULT_CONTEXT)
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_CONTEXT
    }
}

/// Builds the ordered context list for a token sequence.
///
/// The positional context always comes first, even when it collects
/// nothing. Each flag starts a new context; each value goes to the most
/// recent one. A repeated flag yields a second, separate context.
///
/// # Examples
///
/// ```
/// use wordlist_args::context::build_contexts;
/// use wordlist_args::tokenizer::ArgLexer;
///
/// let scan = ArgLexer::tokenize("foo --bar baz qux");
/// let contexts = build_contexts(&scan.tokens, None).unwrap();
///
/// assert_eq!(contexts.len(), 2);
/// assert_eq!(contexts[0].values, vec!["foo"]);
/// assert_eq!(contexts[1].name, "bar");
/// assert_eq!(contexts[1].values, vec!["baz", "qux"]);
/// ```
pub fn build_contexts(
    tokens: &[Token],
    schema: Option<&Schema>,
) -> Result<Vec<ArgumentContext>, ScanError> {
    let (mut finished, current) = tokens.iter().try_fold(
        (Vec::new(), ArgumentContext::positional()),
        |(mut finished, mut current), token| {
            match token {
                Token::Flag { text, .. } => {
                    let next = ArgumentContext::new(resolve_name(text, schema)?);
                    finished.push(std::mem::replace(&mut current, next));
                }
                Token::Value { text, .. } => {
                    check_positional_value(text, &current, schema)?;
                    current.values.push(text.clone());
                }
            }
            Ok::<_, ScanError>((finished, current))
        },
    )?;

    finished.push(current);
    Ok(finished)
}
