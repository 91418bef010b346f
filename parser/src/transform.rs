//! Converting finished contexts into the final result mapping.

use wordlist_core::{ArgValue, ParseResult, Schema};

use crate::context::ArgumentContext;

/// Folds contexts into a [`ParseResult`].
///
/// Names declared with `num = 1` keep only their first value; everything
/// else keeps the full sequence. A later context replaces an earlier one
/// with the same name instead of merging with it.
pub fn transform(contexts: Vec<ArgumentContext>, schema: Option<&Schema>) -> ParseResult {
    contexts
        .into_iter()
        .map(|context| {
            let scalar = schema
                .and_then(|schema| schema.get(&context.name))
                .is_some_and(|entry| entry.is_scalar());
            let value = if scalar {
                ArgValue::Scalar(context.values.into_iter().next())
            } else {
                ArgValue::Sequence(context.values)
            };
            (context.name, value)
        })
        .collect()
}
