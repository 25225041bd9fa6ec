//! `cmdargs` is a pull-style command line parser for Rust.
//!
//! There is no up-front declaration of the Cli.
//! Instead, the program *pulls* each typed flag or parameter straight out of the command line, wherever it happens to be written.
//! Every extraction consumes the tokens it matches, and records the option for the usage message.
//! Whatever is left over at the end is available to the program as-is: typically file names, or mistakes to report.
//!
//! `cmdargs` prioritizes the following concerns:
//! * *No ceremony*:
//! One line per option, right where the value is needed.
//! * *Typed values*:
//! Integers (in base-10 or base-16), floats, strings, and delimited lists of these.
//! * *Self documenting*:
//! The usage message is assembled from the extractions themselves, defaults included.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/example.rs")]
//! ```
//!
//! ```console
//! $ example --name "hello me" -n 0xC --ratio=0.25 --val 3,4 file.txt
//!
//! name=hello me
//! number=12
//! ratio=0.25
//! numbers=3,4
//! remaining: file.txt
//!
//! $ example --nb 3
//! Example of command line arguments
//! Options are:
//!     --help                         Getting usage
//!     --name (default: "stone")      The name of something
//!     --number (-n) (default: 5)     Number of whatever
//!   == Advanced options:
//!     --ratio (default: 0.2)         The ratio
//!     --values (default: 1,2)        A comma separated list of values
//!
//! Error: unparsed options: --nb
//! ```
//!
//! # Extraction
//! Start from an [`ArgStore`], and extract via:
//! * [`ArgStore::get_flag`]: counts (and consumes) every occurrence of a flag.
//! * [`ArgStore::get_param`]: a single value, taken from the token following the flag.
//! * [`ArgStore::get_params`]: multiple values, delimited by `,` (see [`ArgStore::get_params_with_separator`] for other delimiters).
//!
//! Options are named by a long name and an optional short name.
//! The long name is matched first (`--number`), and then the short name (`-n`).
//! When a parameter appears more than once, the first occurrence is extracted and the others remain.
//! Flags on the other hand consume every occurrence.
//!
//! ### Token grammar
//! * `--name`: a long option.
//! By default the token may abbreviate the long name: `--num` matches `number` (see [`LongMatch`]).
//! * `-n`: a short option.
//! Short options may be aggregated: `-hvv` holds `h` once and `v` twice.
//! Extracting a short option out of an aggregate strips just that one character (`-hvv` becomes `-vv`).
//! * `--name=value`: equivalent to `--name value`.
//! Every token is split on `=` before parsing, unless disabled via [`ArgStoreBuilder::split_on_equals`].
//! * Anything else is a value, or a remaining argument.
//!
//! Notice, a value is whatever token follows its flag, even one starting with `-`.
//! ```
//! use cmdargs::ArgStore;
//!
//! let mut store = ArgStore::new(vec!["program", "--offset", "-3"], "");
//! let offset: i32 = store.get_param("offset", None, 0, "").unwrap();
//! assert_eq!(offset, -3);
//! ```
//!
//! ### Multiple values
//! Multi-value parameters may enforce the size of their defaults.
//! In this case, numeric values are gathered across subsequent tokens until the size is reached (or a `-..` token is seen).
//! A single value is broadcast to the full size.
//! ```
//! use cmdargs::ArgStore;
//!
//! let mut store = ArgStore::new(vec!["program", "--size", "3", "4", "--scale", "2"], "");
//! let size: Vec<u32> = store.get_params("size", None, vec![640, 480], true, "").unwrap();
//! let scale: Vec<f32> = store.get_params("scale", None, vec![1.0, 1.0], true, "").unwrap();
//! assert_eq!(size, vec![3, 4]);
//! assert_eq!(scale, vec![2.0, 2.0]);
//! ```
//!
//! ### Residuals
//! Once extraction is finished, check the residual tokens:
//! * [`ArgStore::remaining`]: every token not consumed.
//! * [`ArgStore::unparsed_opts`]: the remaining tokens that look like options (start with `-`).
//!
//! [`ArgStore::error_if_remaining`] and [`ArgStore::error_if_unparsed`] turn these into an [`ArgError`].
//!
//! # Errors
//! All failures are reported via [`ArgError`].
//! Extraction fails fast: a failing extraction does not consume its flag when the value is missing.
//! To report an error the conventional way (usage, then the error, then exit code `1`) use [`ArgStore::exit_on_error`].
//!
//! # Features
//! * `tracing_debug`: emit debug traces of the matching (via [tracing](https://docs.rs/tracing)).
pub use cmdargs_builder::*;
