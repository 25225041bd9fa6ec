mod capture;
mod collection;
mod core;

pub use self::core::*;
