use std::io::{self, Write};

use wordlist_core::ParseResult;

/// Result of parsing user input.
///
/// Only [`ParseOutcome::Parsed`] carries a result. The other variants carry
/// the formatted text to show the user; neither is a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(ParseResult),
    /// An explicit help flag was given.
    Help(String),
    /// Unknown argument, stray positional value or malformed input.
    Invalid(String),
}

impl ParseOutcome {
    /// Returns the parse result, discarding any message.
    pub fn into_result(self) -> Option<ParseResult> {
        match self {
            Self::Parsed(result) => Some(result),
            Self::Help(_) | Self::Invalid(_) => None,
        }
    }

    /// Help or diagnostic text, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Parsed(_) => None,
            Self::Help(message) | Self::Invalid(message) => Some(message),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// Writes any message to `writer` and returns the result, if there is
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlist_args::ParseOutcome;
    ///
    /// let mut stderr = Vec::new();
    /// let result = ParseOutcome::Invalid("invalid argument \"x\"\n\n".into())
    ///     .report(&mut stderr)
    ///     .unwrap();
    ///
    /// assert!(result.is_none());
    /// assert!(String::from_utf8(stderr).unwrap().starts_with("invalid argument"));
    /// ```
    pub fn report<W: Write>(self, writer: &mut W) -> io::Result<Option<ParseResult>> {
        match self {
            Self::Parsed(result) => Ok(Some(result)),
            Self::Help(message) | Self::Invalid(message) => {
                writeln!(writer, "{message}")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wordlist_core::ArgValue;

    use super::*;

    #[test]
    fn test_report_parsed_writes_nothing() {
        let mut result = ParseResult::new();
        result.insert("$default", ArgValue::Sequence(vec![]));

        let mut sink = Vec::new();
        let reported = ParseOutcome::Parsed(result.clone())
            .report(&mut sink)
            .expect("write");
        assert_eq!(reported, Some(result));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_report_help_writes_message_line() {
        let mut sink = Vec::new();
        let reported = ParseOutcome::Help("usage: words\n".into())
            .report(&mut sink)
            .expect("write");
        assert_eq!(reported, None);
        assert_eq!(String::from_utf8(sink).unwrap(), "usage: words\n\n");
    }

    #[test]
    fn test_message_accessor() {
        assert_eq!(ParseOutcome::Invalid("bad".into()).message(), Some("bad"));
        assert!(ParseOutcome::Parsed(ParseResult::new()).message().is_none());
        assert!(!ParseOutcome::Help(String::new()).is_parsed());
    }
}
