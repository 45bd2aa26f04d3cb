//! Build script for ramrod-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates machine.toml at compile time, then runs the same parser
//!   the firmware uses at boot so both accept exactly the same files

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ramrod_core::config::{parse_config, MICROS_PER_MS, MICROS_PER_S};

/// A duration key, its scale to microseconds, and whether zero is allowed
type DurationKey = (&'static str, u64, bool);

const TIMING_KEYS: &[DurationKey] = &[
    ("idle_ms", MICROS_PER_MS, false),
    ("countdown_s", MICROS_PER_S, false),
    ("stroke_ms", MICROS_PER_MS, false),
    ("lockout_ms", MICROS_PER_MS, true),
    ("blink_ms", MICROS_PER_MS, false),
];
const LOOP_KEYS: &[DurationKey] = &[("poll_interval_ms", MICROS_PER_MS, false)];
const INPUT_KEYS: &[&str] = &["active_low"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate machine.toml configuration at compile time
fn validate_config() {
    // Re-run if machine.toml changes
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: machine.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds machine.toml from the ramrod-firmware       ║\n\
            ║  directory. An empty file selects all defaults.                  ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read machine.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in machine.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_durations(&config, "timing", TIMING_KEYS, &mut errors);
    validate_durations(&config, "loop", LOOP_KEYS, &mut errors);
    validate_input(&config, &mut errors);

    // The boot-time parser has the final word; anything it rejects would
    // silently fall back to defaults on the device
    if errors.is_empty() {
        if let Err(e) = parse_config(&config_content) {
            errors.push(format!("rejected by the firmware parser: {}", e));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in machine.toml                    ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=machine.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only [timing], [input] and [loop] tables are understood by the firmware
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return;
    };

    for (name, value) in root {
        match (name.as_str(), value) {
            ("timing" | "input" | "loop", toml::Value::Table(_)) => {}
            ("timing" | "input" | "loop", _) => {
                errors.push(format!("[{}] must be a table", name));
            }
            _ => errors.push(format!("unknown section or key '{}'", name)),
        }
    }
}

/// Duration keys must be non-negative integers that fit in microseconds,
/// non-zero unless allowed
fn validate_durations(
    config: &toml::Value,
    section: &str,
    keys: &[DurationKey],
    errors: &mut Vec<String>,
) {
    let Some(table) = config.get(section).and_then(|s| s.as_table()) else {
        return;
    };

    for (key, value) in table {
        let Some((_, scale, zero_ok)) = keys.iter().find(|(k, _, _)| *k == key.as_str()) else {
            errors.push(format!("[{}] unknown key '{}'", section, key));
            continue;
        };

        match value {
            toml::Value::Integer(v) if *v < 0 => {
                errors.push(format!("[{}] {} must not be negative", section, key));
            }
            toml::Value::Integer(0) if !zero_ok => {
                errors.push(format!("[{}] {} must be non-zero", section, key));
            }
            toml::Value::Integer(v) if (*v as u64).checked_mul(*scale).is_none() => {
                errors.push(format!("[{}] {} is too large", section, key));
            }
            toml::Value::Integer(_) => {}
            _ => errors.push(format!("[{}] {} must be an integer", section, key)),
        }
    }
}

fn validate_input(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.get("input").and_then(|s| s.as_table()) else {
        return;
    };

    for (key, value) in table {
        if !INPUT_KEYS.contains(&key.as_str()) {
            errors.push(format!("[input] unknown key '{}'", key));
        } else if !value.is_bool() {
            errors.push(format!("[input] {} must be true or false", key));
        }
    }
}
