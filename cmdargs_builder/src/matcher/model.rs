#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::LongMatch;

/// The location of a matched option in the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hit {
    /// A `--long` token.
    Long(usize),
    /// A `-s` token, possibly aggregated with other short names (ex: `-hsv`).
    Short(usize, char),
}

impl Hit {
    pub(crate) fn index(&self) -> usize {
        match self {
            Hit::Long(index) | Hit::Short(index, _) => *index,
        }
    }

    /// The flag as it was matched, ex: `--nb` or `-n`.
    pub(crate) fn flag(&self, long: &str) -> String {
        match self {
            Hit::Long(_) => format!("--{long}"),
            Hit::Short(_, short) => format!("-{short}"),
        }
    }
}

/// The not-yet-consumed command line tokens.
#[derive(Debug)]
pub(crate) struct TokenList {
    tokens: Vec<String>,
    long_match: LongMatch,
}

impl TokenList {
    pub(crate) fn new(
        tokens: impl IntoIterator<Item = String>,
        split_on_equals: bool,
        long_match: LongMatch,
    ) -> Self {
        let tokens = if split_on_equals {
            tokens
                .into_iter()
                .flat_map(|token| split_equals(&token))
                .collect()
        } else {
            tokens.into_iter().collect()
        };

        Self { tokens, long_match }
    }

    /// Find the first `--long` token matching `name`.
    pub(crate) fn find_long(&self, name: &str) -> Option<Hit> {
        let index = self.tokens.iter().position(|token| {
            if token.len() < 3 {
                return false;
            }

            match token.strip_prefix("--") {
                Some(suffix) => match self.long_match {
                    // The token suffix is compared against the declared name, truncated to the suffix length.
                    LongMatch::Prefix => name.starts_with(suffix),
                    LongMatch::Exact => name == suffix,
                },
                None => false,
            }
        });

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Long name '{name}' matched at: {index:?}.");
        }

        index.map(Hit::Long)
    }

    /// Find the first `-..` token containing `short` (after the leading `-`).
    pub(crate) fn find_short(&self, short: Option<char>) -> Option<Hit> {
        // A space is reserved to mean "no short name".
        let short = short.filter(|s| *s != ' ')?;
        let index = self.tokens.iter().position(|token| {
            let mut chars = token.chars();

            match (chars.next(), chars.next()) {
                (Some('-'), Some(second)) if second != '-' => token[1..].contains(short),
                _ => false,
            }
        });

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Short name '{short}' matched at: {index:?}.");
        }

        index.map(|index| Hit::Short(index, short))
    }

    /// Find the option, preferring its long name over its short name.
    pub(crate) fn find(&self, long: &str, short: Option<char>) -> Option<Hit> {
        self.find_long(long).or_else(|| self.find_short(short))
    }

    /// Whether there is a token following the `index`.
    pub(crate) fn has_successor(&self, index: usize) -> bool {
        index + 1 < self.tokens.len()
    }

    /// Consume the matched option, returning the index of the token which now follows it.
    ///
    /// Long and bare short (`-s`) tokens are removed outright.
    /// Aggregated short tokens (`-hsv`) survive with the single matched character stripped (`-hv`).
    pub(crate) fn claim(&mut self, hit: Hit) -> usize {
        match hit {
            Hit::Long(index) => {
                self.tokens.remove(index);
                index
            }
            Hit::Short(index, short) => {
                if self.tokens[index].chars().count() == 2 {
                    self.tokens.remove(index);
                    index
                } else {
                    let token = &mut self.tokens[index];

                    // Skip the leading '-' (it is a single byte).
                    if let Some(offset) = token[1..].find(short) {
                        token.remove(offset + 1);
                    }

                    index + 1
                }
            }
        }
    }

    /// Remove and return the token at `index`, if it exists.
    pub(crate) fn take(&mut self, index: usize) -> Option<String> {
        if index < self.tokens.len() {
            Some(self.tokens.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn peek(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub(crate) fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

// Splits on every '=', dropping a trailing empty piece: `a=b` -> [a, b], `a=` -> [a], `` -> [].
fn split_equals(token: &str) -> Vec<String> {
    let mut pieces: Vec<String> = token.split('=').map(str::to_string).collect();

    if pieces.last().map_or(false, String::is_empty) {
        pieces.pop();
    }

    pieces
}
