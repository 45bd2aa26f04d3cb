//! Configuration types
//!
//! Board-agnostic configuration structures, parsed from the embedded
//! `machine.toml` at boot.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
