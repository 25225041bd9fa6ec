//! Traits which, typically, may be imported without concern: `use cmdargs::prelude::*`.

use crate::model::ValueKind;

/// Behaviour to scan a typed value out of a command line token.
///
/// Scanning reads a value from the *front* of the input and reports how many bytes it consumed.
/// The store decides whether a partial scan is acceptable (ex: a value followed by a separator),
/// or whether the token must be rescanned as base-16 (ex: `0x1F`).
// Needs to be imported in order to implement a custom `Capturable`.
pub trait Capturable: Sized {
    /// Whether this type scans as a number, or captures raw text verbatim.
    const KIND: ValueKind;

    /// Scan a value from the front of `input`, returning it along with the number of bytes consumed.
    /// Returns `None` when no value can be read at all.
    fn scan(input: &str) -> Option<(Self, usize)>;

    /// Scan a base-16 value from the front of `input` (an optional `0x` prefix is accepted).
    /// Types without a base-16 form never succeed.
    fn scan_hex(_input: &str) -> Option<(Self, usize)> {
        None
    }

    /// Render this value for display in the usage message.
    fn render(&self) -> String;
}
