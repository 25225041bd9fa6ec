//! Builder module for `cmdargs`.
//! See [documentation root](https://docs.rs/cmdargs/latest/cmdargs/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod usage;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
