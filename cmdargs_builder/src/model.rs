use thiserror::Error;

/// The policy for matching a `--long` token against a declared long name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LongMatch {
    /// The token may abbreviate the declared name: `--num` matches `numbers`.
    /// The token must not be longer than the declared name.
    #[default]
    Prefix,
    /// The token must spell out the declared name exactly.
    Exact,
}

/// How a [`Capturable`](crate::prelude::Capturable) type is captured from its token(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Scanned as a number, with a base-16 fallback.
    /// Multi-value parameters may accumulate values across several tokens.
    Numeric,
    /// Captured verbatim, embedded whitespace included.
    /// Multi-value parameters only ever read a single token.
    Text,
}

/// The errors surfaced while extracting from, or inspecting, an `ArgStore`.
///
/// Each message begins with a line break followed by `Error: `, so it may be appended directly after the usage message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    /// An option was matched, but no token follows it to serve as its value.
    #[error("\nError: parameter {flag} is not followed by a value")]
    MissingValue {
        /// The matched flag, as written (ex: `--nb` or `-n`).
        flag: String,
    },

    /// The value token could not be converted to the requested type.
    #[error("\nError: parameter {name} is not followed by a correct value ('{token}' cannot convert to {type_name})")]
    InvalidValue {
        /// The parameter, ex: `--nb (-n)`.
        name: String,
        /// The offending token (or element of a delimited token).
        token: String,
        /// The requested type.
        type_name: &'static str,
    },

    /// A size-enforced multi-value parameter received the wrong number of values.
    #[error("\nError: parameter {name} is not followed by {expected} values as expected (provided={provided}).")]
    ArityMismatch {
        /// The parameter, ex: `--numbers (-N)`.
        name: String,
        /// The required number of values.
        expected: usize,
        /// The number of values actually provided.
        provided: usize,
    },

    /// Tokens remain which were never consumed.
    #[error("\nError: remaining args: {}", .tokens.join(" "))]
    RemainingArgs {
        /// The remaining tokens, in command line order.
        tokens: Vec<String>,
    },

    /// Option-like tokens (starting with `-`) remain which were never consumed.
    #[error("\nError: unparsed options: {}", .tokens.join(" "))]
    UnparsedOpts {
        /// The unparsed option tokens, in command line order.
        tokens: Vec<String>,
    },
}

/// Describe a parameter by its long & short names, ex: `--nb (-n)`.
pub(crate) fn parameter_name(long: &str, short: Option<char>) -> String {
    match short.filter(|s| *s != ' ') {
        Some(s) => format!("--{long} (-{s})"),
        None => format!("--{long}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("nb", Some('n'), "--nb (-n)")]
    #[case("nb", None, "--nb")]
    #[case("nb", Some(' '), "--nb")]
    fn parameter_names(#[case] long: &str, #[case] short: Option<char>, #[case] expected: &str) {
        assert_eq!(parameter_name(long, short), expected);
    }

    #[test]
    fn error_messages() {
        let error = ArgError::MissingValue {
            flag: "--nb".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "\nError: parameter --nb is not followed by a value"
        );

        let error = ArgError::ArityMismatch {
            name: "--x (-x)".to_string(),
            expected: 3,
            provided: 2,
        };
        assert_eq!(
            error.to_string(),
            "\nError: parameter --x (-x) is not followed by 3 values as expected (provided=2)."
        );

        let error = ArgError::RemainingArgs {
            tokens: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(error.to_string(), "\nError: remaining args: a b");

        let error = ArgError::UnparsedOpts {
            tokens: vec!["-x".to_string()],
        };
        assert_eq!(error.to_string(), "\nError: unparsed options: -x");
    }

    #[test]
    fn long_match_default() {
        assert_eq!(LongMatch::default(), LongMatch::Prefix);
    }
}
