use std::env;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::capture::capture;
use crate::api::collection::{scan_elements, split_elements, ValueBuffer};
use crate::constant::DEFAULT_SEPARATOR;
use crate::matcher::TokenList;
use crate::model::{parameter_name, ArgError, LongMatch, ValueKind};
use crate::prelude::Capturable;
use crate::usage::{terminal_width, ConsoleInterface, UsageRecorder, UserInterface};

/// The configuration for an [`ArgStore`].
///
/// ### Example
/// ```
/// # use cmdargs_builder as cmdargs;
/// use cmdargs::{ArgStore, LongMatch};
///
/// let mut store = ArgStore::builder("My program.")
///     .split_on_equals(false)
///     .long_match(LongMatch::Exact)
///     .build(vec!["program", "--verbose"]);
///
/// assert_eq!(store.get_flag("verbose", Some('v'), "Be chatty."), 1);
/// ```
pub struct ArgStoreBuilder {
    intro: String,
    split_on_equals: bool,
    long_match: LongMatch,
    user_interface: Box<dyn UserInterface>,
}

impl ArgStoreBuilder {
    /// Whether to split every token on `=` before parsing (default: `true`).
    ///
    /// When enabled, `--name=value` is equivalent to `--name value`.
    /// The consequence is that a value may never contain `=`.
    pub fn split_on_equals(mut self, enabled: bool) -> Self {
        self.split_on_equals = enabled;
        self
    }

    /// How `--long` tokens are matched against the declared long names (default: [`LongMatch::Prefix`]).
    pub fn long_match(mut self, long_match: LongMatch) -> Self {
        self.long_match = long_match;
        self
    }

    #[cfg(test)]
    pub(crate) fn user_interface(mut self, user_interface: Box<dyn UserInterface>) -> Self {
        self.user_interface = user_interface;
        self
    }

    /// Build the store from a full argument vector.
    /// The first argument (the program name) is discarded.
    pub fn build<I, S>(self, argv: I) -> ArgStore
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_tokens(argv.into_iter().skip(1))
    }

    /// Build the store from the command line tokens alone (without the program name).
    pub fn build_tokens<I, S>(self, tokens: I) -> ArgStore
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ArgStoreBuilder {
            intro,
            split_on_equals,
            long_match,
            user_interface,
        } = self;
        let tokens = TokenList::new(
            tokens.into_iter().map(|token| token.as_ref().to_string()),
            split_on_equals,
            long_match,
        );

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built store from tokens: {:?}.", tokens.tokens());
        }

        ArgStore {
            tokens,
            recorder: UsageRecorder::new(intro),
            user_interface,
        }
    }

    /// Build the store from the Cli [`env::args`].
    pub fn from_env(self) -> ArgStore {
        self.build(env::args())
    }
}

/// The argument store: a pull-style command line parser.
///
/// Every extraction (`get_flag`, `get_param`, `get_params`) *consumes* the tokens it matches, so a token is never matched twice.
/// Every extraction also records the option for the [`ArgStore::usage`] message, in declaration order.
/// Once the program has extracted everything it needs, inspect what's left via [`ArgStore::remaining`] and [`ArgStore::unparsed_opts`].
///
/// ### Example
/// ```
/// # use cmdargs_builder as cmdargs;
/// use cmdargs::ArgStore;
///
/// let mut store = ArgStore::new(vec!["program", "-v", "--nb", "12", "file.txt"], "My program.");
/// let verbose = store.get_flag("verbose", Some('v'), "Be chatty.");
/// let nb: u32 = store.get_param("nb", Some('n'), 0, "The number of frames.").unwrap();
///
/// assert_eq!(verbose, 1);
/// assert_eq!(nb, 12);
/// assert_eq!(store.remaining(), vec!["file.txt"]);
/// ```
pub struct ArgStore {
    tokens: TokenList,
    recorder: UsageRecorder,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for ArgStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgStore")
            .field("tokens", &self.tokens)
            .field("recorder", &self.recorder)
            .finish()
    }
}

impl ArgStore {
    /// Configure an argument store.
    ///
    /// The `intro` summarizes the program; it heads the usage message.
    pub fn builder(intro: impl Into<String>) -> ArgStoreBuilder {
        ArgStoreBuilder {
            intro: intro.into(),
            split_on_equals: true,
            long_match: LongMatch::default(),
            user_interface: Box::<ConsoleInterface>::default(),
        }
    }

    /// Create an argument store with the default configuration.
    /// The first argument (the program name) is discarded.
    ///
    /// ### Example
    /// ```
    /// # use cmdargs_builder as cmdargs;
    /// use cmdargs::ArgStore;
    ///
    /// let store = ArgStore::new(vec!["program"], "My program.");
    /// assert!(store.remaining().is_empty());
    /// ```
    pub fn new<I, S>(argv: I, intro: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::builder(intro).build(argv)
    }

    /// Create an argument store from the Cli [`env::args`], with the default configuration.
    pub fn from_env(intro: impl Into<String>) -> Self {
        Self::builder(intro).from_env()
    }

    /// Extract a single-value parameter, or `default` when it is absent.
    ///
    /// The parameter is matched by `--long` first, and then by `-short` (pass `None` for no short name).
    /// The value is always the token that follows the matched flag.
    /// Numeric values may be written in base-16 (ex: `0xC`); strings are taken verbatim.
    ///
    /// ### Example
    /// ```
    /// # use cmdargs_builder as cmdargs;
    /// use cmdargs::ArgStore;
    ///
    /// let mut store = ArgStore::new(vec!["program", "--name=hello me", "-n", "0xC"], "");
    /// let name: String = store.get_param("name", None, "stone".to_string(), "The name.").unwrap();
    /// let nb: i32 = store.get_param("nb", Some('n'), 0, "The number.").unwrap();
    /// let ratio: f32 = store.get_param("ratio", None, 0.2, "The ratio.").unwrap();
    ///
    /// assert_eq!(name, "hello me");
    /// assert_eq!(nb, 12);
    /// assert_eq!(ratio, 0.2);
    /// ```
    pub fn get_param<T: Capturable>(
        &mut self,
        long: &str,
        short: Option<char>,
        default: T,
        description: impl Into<String>,
    ) -> Result<T, ArgError> {
        let rendered = match T::KIND {
            ValueKind::Numeric => default.render(),
            ValueKind::Text => format!("\"{}\"", default.render()),
        };
        self.recorder.option(long, short, Some(rendered), description);

        match self.claim_value(long, short)? {
            Some(token) => {
                capture::<T>(&token).map_err(|e| e.into_arg_error(parameter_name(long, short)))
            }
            None => Ok(default),
        }
    }

    /// Extract a multi-value parameter, delimited by `,`, or `defaults` when it is absent.
    ///
    /// See [`ArgStore::get_params_with_separator`].
    pub fn get_params<T: Capturable + Clone>(
        &mut self,
        long: &str,
        short: Option<char>,
        defaults: Vec<T>,
        enforce_default_size: bool,
        description: impl Into<String>,
    ) -> Result<Vec<T>, ArgError> {
        self.get_params_with_separator(
            long,
            short,
            defaults,
            enforce_default_size,
            description,
            DEFAULT_SEPARATOR,
        )
    }

    /// Extract a multi-value parameter, or `defaults` when it is absent.
    ///
    /// The token following the matched flag is split on `separator` (runs of the separator count as one).
    ///
    /// When `enforce_default_size` is set, precisely `defaults.len()` values are required:
    /// * Numeric values keep being read from the subsequent tokens until enough are collected, or until a token starting with `-`.
    /// * A single value is broadcast to fill the required count (ex: `--scale 2` gives `[2, 2, 2]`).
    /// * Any other count is an [`ArgError::ArityMismatch`].
    ///
    /// Text values only ever read the single following token.
    ///
    /// ### Example
    /// ```
    /// # use cmdargs_builder as cmdargs;
    /// use cmdargs::ArgStore;
    ///
    /// let mut store = ArgStore::new(vec!["program", "--size", "640", "480", "--scale", "2"], "");
    /// let size: Vec<u32> = store.get_params("size", None, vec![800, 600], true, "Width & height.").unwrap();
    /// let scale: Vec<f64> = store.get_params("scale", None, vec![1.0, 1.0, 1.0], true, "Scale.").unwrap();
    /// let tags: Vec<String> = store
    ///     .get_params_with_separator("tags", None, vec!["a".to_string()], false, "Tags.", ';')
    ///     .unwrap();
    ///
    /// assert_eq!(size, vec![640, 480]);
    /// assert_eq!(scale, vec![2.0, 2.0, 2.0]);
    /// assert_eq!(tags, vec!["a"]);
    /// ```
    pub fn get_params_with_separator<T: Capturable + Clone>(
        &mut self,
        long: &str,
        short: Option<char>,
        defaults: Vec<T>,
        enforce_default_size: bool,
        description: impl Into<String>,
        separator: char,
    ) -> Result<Vec<T>, ArgError> {
        let rendered = defaults
            .iter()
            .map(Capturable::render)
            .collect::<Vec<String>>()
            .join(",");
        self.recorder.option(long, short, Some(rendered), description);

        let index = match self.claim_trigger(long, short)? {
            Some(index) => index,
            None => return Ok(defaults),
        };
        let required = if enforce_default_size {
            Some(defaults.len())
        } else {
            None
        };
        let mut buffer = ValueBuffer::new(parameter_name(long, short), required);

        match T::KIND {
            ValueKind::Text => {
                if let Some(token) = self.tokens.take(index) {
                    let values = split_elements(&token, separator)
                        .into_iter()
                        .map(capture::<T>)
                        .collect::<Result<Vec<T>, _>>()
                        .map_err(|e| e.into_arg_error(buffer.name()))?;
                    buffer.extend(values);
                }
            }
            ValueKind::Numeric => {
                while let Some(token) = self.tokens.take(index) {
                    let values = scan_elements::<T>(&token, separator)
                        .map_err(|e| e.into_arg_error(buffer.name()))?;
                    buffer.extend(values);

                    // A token starting with '-' is the next option.
                    let more = self
                        .tokens
                        .peek(index)
                        .map_or(false, |next| !next.starts_with('-'));

                    if !(buffer.is_open() && more) {
                        break;
                    }

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Parameter '{long}' accumulating from the next token.");
                    }
                }
            }
        }

        buffer.close()
    }

    /// Count the occurrences of a flag, consuming every one of them.
    ///
    /// Short names may be aggregated, where each repetition counts (ex: `-vv` counts as 2).
    ///
    /// ### Example
    /// ```
    /// # use cmdargs_builder as cmdargs;
    /// use cmdargs::ArgStore;
    ///
    /// let mut store = ArgStore::new(vec!["program", "-vhv", "--verbose"], "");
    ///
    /// assert_eq!(store.get_flag("verbose", Some('v'), "Be chatty."), 3);
    /// assert_eq!(store.get_flag("help", Some('h'), "Show usage."), 1);
    /// assert_eq!(store.get_flag("quiet", Some('q'), "Be quiet."), 0);
    /// assert!(store.remaining().is_empty());
    /// ```
    pub fn get_flag(
        &mut self,
        long: &str,
        short: Option<char>,
        description: impl Into<String>,
    ) -> usize {
        self.recorder.option(long, short, None, description);
        let mut count = 0;

        while let Some(hit) = self.tokens.find_long(long) {
            self.tokens.claim(hit);
            count += 1;
        }

        while let Some(hit) = self.tokens.find_short(short) {
            self.tokens.claim(hit);
            count += 1;
        }

        count
    }

    /// Check whether an option is present, without consuming it.
    ///
    /// This only gives a meaningful answer before the option is extracted.
    pub fn is_present(&self, long: &str, short: Option<char>) -> bool {
        self.tokens.find_long(long).is_some() || self.tokens.find_short(short).is_some()
    }

    /// The tokens which have not been consumed (in command line order).
    pub fn remaining(&self) -> Vec<String> {
        self.tokens.tokens().to_vec()
    }

    /// The remaining tokens which look like options (starting with `-`).
    pub fn unparsed_opts(&self) -> Vec<String> {
        self.tokens
            .tokens()
            .iter()
            .filter(|token| token.starts_with('-'))
            .cloned()
            .collect()
    }

    /// Fail if any tokens have not been consumed.
    pub fn error_if_remaining(&self) -> Result<(), ArgError> {
        let tokens = self.remaining();

        if tokens.is_empty() {
            Ok(())
        } else {
            Err(ArgError::RemainingArgs { tokens })
        }
    }

    /// Fail if any option-like tokens have not been consumed.
    pub fn error_if_unparsed(&self) -> Result<(), ArgError> {
        let tokens = self.unparsed_opts();

        if tokens.is_empty() {
            Ok(())
        } else {
            Err(ArgError::UnparsedOpts { tokens })
        }
    }

    /// Add a titled separator to the usage message, grouping the options declared after it.
    pub fn add_usage_separator(&mut self, title: impl Into<String>) {
        self.recorder.separator(title);
    }

    /// Add text after the options in the usage message.
    /// If repeated, the texts are concatenated.
    pub fn add_usage_outro(&mut self, text: impl AsRef<str>) {
        self.recorder.outro(text.as_ref());
    }

    /// The usage message, built from the intro, the options declared so far, and the outro.
    ///
    /// ### Example
    /// ```
    /// # use cmdargs_builder as cmdargs;
    /// use cmdargs::ArgStore;
    ///
    /// let mut store = ArgStore::builder("My program.").build_tokens(Vec::<&str>::new());
    /// store.get_flag("help", Some('h'), "Show usage.");
    /// store.get_param("nb", Some('n'), 0, "The number.").unwrap();
    ///
    /// assert_eq!(
    ///     store.usage(),
    ///     "My program.\nOptions are:\n    --help (-h)                Show usage.\n    --nb (-n) (default: 0)     The number.\n"
    /// );
    /// ```
    pub fn usage(&self) -> String {
        self.recorder.render(None)
    }

    /// The usage message, with descriptions word wrapped to fit within `width` columns.
    pub fn usage_for_width(&self, width: usize) -> String {
        self.recorder.render(Some(width))
    }

    /// Print the usage message, word wrapped to the terminal (when there is one).
    pub fn print_usage(&self) {
        self.user_interface
            .print(self.recorder.render(terminal_width()));
    }

    /// Print the usage message followed by the `error`, to stderr.
    pub fn report(&self, error: &ArgError) {
        self.user_interface
            .print_error_context(self.recorder.render(terminal_width()));
        self.user_interface.print_error(error);
    }

    /// Unwrap the `result`, or [`ArgStore::report`] its error and exit with error code `1` (via `std::process::exit`).
    ///
    /// ### Example
    /// ```no_run
    /// # use cmdargs_builder as cmdargs;
    /// use cmdargs::ArgStore;
    ///
    /// let mut store = ArgStore::from_env("My program.");
    /// let result = store.get_param("nb", Some('n'), 0u32, "The number.");
    /// let nb = store.exit_on_error(result);
    /// ```
    pub fn exit_on_error<T>(&self, result: Result<T, ArgError>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => {
                self.report(&error);
                std::process::exit(1);
            }
        }
    }

    // Locate & consume the option's flag, returning the index of its value token (when present).
    fn claim_trigger(
        &mut self,
        long: &str,
        short: Option<char>,
    ) -> Result<Option<usize>, ArgError> {
        let hit = match self.tokens.find(long, short) {
            Some(hit) => hit,
            None => return Ok(None),
        };

        if !self.tokens.has_successor(hit.index()) {
            return Err(ArgError::MissingValue {
                flag: hit.flag(long),
            });
        }

        Ok(Some(self.tokens.claim(hit)))
    }

    fn claim_value(
        &mut self,
        long: &str,
        short: Option<char>,
    ) -> Result<Option<String>, ArgError> {
        match self.claim_trigger(long, short)? {
            Some(index) => Ok(self.tokens.take(index)),
            None => Ok(None),
        }
    }
}
