//! Simple TOML parser for machine configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the actuator configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (TOML integers and booleans)
//! - Decimal, `0x`, `0o` and `0b` integers with `_` separators
//! - [section] headers
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Strings
//! - Arrays and inline tables
//! - Dotted keys
//!
//! Full TOML syntax is checked on the host by the firmware build script,
//! which also runs this parser so both agree on what is accepted.

use core::fmt;

use super::types::{ConfigError, MachineConfig, MICROS_PER_MS, MICROS_PER_S};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Value has the wrong type or does not parse
    InvalidValue,
    /// Value overflows when converted to microseconds
    OutOfRange,
    /// Section or key appears more than once
    Duplicate,
    /// Parsed configuration failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSection => f.write_str("invalid section header"),
            ParseError::UnknownKey => f.write_str("unknown key"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::OutOfRange => f.write_str("value out of range"),
            ParseError::Duplicate => f.write_str("duplicate section or key"),
            ParseError::Invalid(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
    Input,
    Loop,
}

/// Parse TOML configuration into MachineConfig
///
/// Keys that are absent keep their defaults. The result is validated
/// before it is returned.
pub fn parse_config(input: &str) -> Result<MachineConfig, ParseError> {
    let mut config = MachineConfig::default();
    let mut section = Section::Root;
    let mut seen_sections = 0u8;
    let mut seen_keys = 0u16;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            let bit = 1 << section as u8;
            if seen_sections & bit != 0 {
                return Err(ParseError::Duplicate);
            }
            seen_sections |= bit;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        let bit = apply_value(section, key, value, &mut config)?;
        if seen_keys & bit != 0 {
            return Err(ParseError::Duplicate);
        }
        seen_keys |= bit;
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "timing" => Ok(Section::Timing),
        "input" => Ok(Section::Input),
        "loop" => Ok(Section::Loop),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Remove a trailing comment that is not inside a quoted string
fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(hash_pos) if text[..hash_pos].matches('"').count() % 2 == 0 => {
            text[..hash_pos].trim()
        }
        _ => text,
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a TOML integer literal that must not be negative
///
/// Decimal literals may carry a sign and must not have leading zeros.
/// Prefixed literals (`0x`, `0o`, `0b`) are unsigned. An `_` is only
/// allowed between two digits.
fn parse_u64(value: &str) -> Result<u64, ParseError> {
    let (negative, body, radix) = if let Some(hex) = value.strip_prefix("0x") {
        (false, hex, 16)
    } else if let Some(oct) = value.strip_prefix("0o") {
        (false, oct, 8)
    } else if let Some(bin) = value.strip_prefix("0b") {
        (false, bin, 2)
    } else {
        let (negative, digits) = match value.as_bytes().first() {
            Some(b'-') => (true, &value[1..]),
            Some(b'+') => (false, &value[1..]),
            _ => (false, value),
        };
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(ParseError::InvalidValue);
        }
        (negative, digits, 10)
    };

    let mut result: u64 = 0;
    let mut after_digit = false;
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            let before_digit = chars.peek().is_some_and(|n| n.is_digit(radix));
            if !after_digit || !before_digit {
                return Err(ParseError::InvalidValue);
            }
            after_digit = false;
            continue;
        }
        let digit = c.to_digit(radix).ok_or(ParseError::InvalidValue)?;
        result = result
            .checked_mul(u64::from(radix))
            .and_then(|r| r.checked_add(u64::from(digit)))
            .ok_or(ParseError::OutOfRange)?;
        after_digit = true;
    }

    if !after_digit {
        return Err(ParseError::InvalidValue);
    }
    if negative && result != 0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(result)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse an integer and scale it to microseconds
fn parse_scaled(value: &str, scale: u64) -> Result<u64, ParseError> {
    parse_u64(value)?
        .checked_mul(scale)
        .ok_or(ParseError::OutOfRange)
}

/// Store one value, returning the key's bit for duplicate tracking
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut MachineConfig,
) -> Result<u16, ParseError> {
    let timing = &mut config.timing;
    let bit = match (section, key) {
        (Section::Timing, "idle_ms") => {
            timing.idle_us = parse_scaled(value, MICROS_PER_MS)?;
            0
        }
        (Section::Timing, "countdown_s") => {
            timing.countdown_us = parse_scaled(value, MICROS_PER_S)?;
            1
        }
        (Section::Timing, "stroke_ms") => {
            timing.stroke_us = parse_scaled(value, MICROS_PER_MS)?;
            2
        }
        (Section::Timing, "lockout_ms") => {
            timing.lockout_us = parse_scaled(value, MICROS_PER_MS)?;
            3
        }
        (Section::Timing, "blink_ms") => {
            timing.blink_period_us = parse_scaled(value, MICROS_PER_MS)?;
            4
        }
        (Section::Input, "active_low") => {
            config.input.active_low = parse_bool(value)?;
            5
        }
        (Section::Loop, "poll_interval_ms") => {
            config.poll.poll_interval_us = parse_scaled(value, MICROS_PER_MS)?;
            6
        }
        _ => return Err(ParseError::UnknownKey),
    };
    Ok(1 << bit)
}
