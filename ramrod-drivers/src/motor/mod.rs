//! Motor driver implementations
//!
//! - H-bridge: two direction lines, no speed control

pub mod hbridge;

pub use hbridge::HBridge;
