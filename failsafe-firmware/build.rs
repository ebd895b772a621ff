//! Build script for failsafe-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates failsafe.toml at compile time and turns it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let settings = validate_config();
    write_settings(&settings);
}

/// Set up linker search paths for memory.x
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

/// Validated settings from failsafe.toml
struct Settings {
    loop_timeout_ms: u32,
    loop_period_ms: u32,
    heartbeat_period_ms: u32,
    debounce_ms: u32,
}

/// Validate failsafe.toml at compile time
fn validate_config() -> Settings {
    println!("cargo:rerun-if-changed=failsafe.toml");

    let config_path = Path::new("failsafe.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: failsafe.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a failsafe.toml configuration file.       ║\n\
            ║  Please create one in the failsafe-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read failsafe.toml                             ║\n\
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
                ║  ERROR: Invalid TOML syntax in failsafe.toml                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let loop_timeout_ms = read_ms(&config, "supervisor", "loop_timeout_ms", &mut errors);
    let loop_period_ms = read_ms(&config, "loop", "period_ms", &mut errors);
    let heartbeat_period_ms = read_ms(&config, "heartbeat", "period_ms", &mut errors);
    let debounce_ms = read_ms(&config, "manual_trigger", "debounce_ms", &mut errors);

    if loop_period_ms == 0 {
        errors.push("[loop] period_ms must be greater than 0".to_string());
    }
    if heartbeat_period_ms == 0 {
        errors.push("[heartbeat] period_ms must be greater than 0".to_string());
    }
    if loop_timeout_ms > 0 && loop_period_ms >= loop_timeout_ms {
        errors.push("[loop] period_ms must be below loop_timeout_ms".to_string());
    }
    if heartbeat_period_ms >= loop_period_ms {
        errors.push("[heartbeat] period_ms must be below [loop] period_ms".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in failsafe.toml                        ║\n\
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

    if loop_timeout_ms == 0 {
        println!("cargo:warning=loop_timeout_ms = 0: the first delayed feed enters safe mode");
    }
    println!("cargo:warning=failsafe.toml validated successfully");

    Settings {
        loop_timeout_ms,
        loop_period_ms,
        heartbeat_period_ms,
        debounce_ms,
    }
}

/// Read a millisecond value that must fit in u32
fn read_ms(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> u32 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(v)) if *v >= 0 && *v <= u32::MAX as i64 => *v as u32,
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer 0-{}", section, key, u32::MAX));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
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

/// Write the settings as Rust constants for `include!`
fn write_settings(settings: &Settings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("settings.rs")).unwrap();
    writeln!(f, "pub const LOOP_TIMEOUT_MS: u32 = {};", settings.loop_timeout_ms).unwrap();
    writeln!(f, "pub const LOOP_PERIOD_MS: u32 = {};", settings.loop_period_ms).unwrap();
    writeln!(f, "pub const HEARTBEAT_PERIOD_MS: u32 = {};", settings.heartbeat_period_ms).unwrap();
    writeln!(f, "pub const DEBOUNCE_MS: u32 = {};", settings.debounce_ms).unwrap();
}
