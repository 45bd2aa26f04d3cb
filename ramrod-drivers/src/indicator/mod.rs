//! Status indicator implementations

pub mod led;

pub use led::LedPair;
