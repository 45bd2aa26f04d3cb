//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ramrod-core on top of `embedded-hal` digital pins:
//!
//! - Motion driver (two-line H-bridge)
//! - Feedback indicator (green/red LED pair)
//! - Button inputs (active-low or active-high pushbuttons)
//!
//! Pin writes and reads are treated as infallible: every driver requires
//! pins whose error type is [`core::convert::Infallible`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod indicator;
pub mod input;
pub mod motor;
mod pin;

#[cfg(test)]
mod mock;
