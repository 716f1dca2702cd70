//! Build script for flipdot-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time
//! - Generates the panel configuration constants and pin selection

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flipdot_core::config::{PanelConfig, PinConfig};

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
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

/// Parse and validate panel.toml
fn load_config() -> PanelConfig {
    // Re-run if panel.toml changes
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml configuration file.          ║\n\
            ║  Please create one in the flipdot-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: PanelConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid panel.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml failed validation                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("{:?}", e))
        );
    }

    println!(
        "cargo:warning=panel.toml validated: {}x{} panel",
        config.geometry.width, config.geometry.height
    );
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write panel_config.rs into OUT_DIR
fn generate_config(config: &PanelConfig) {
    let mut out = String::new();

    writeln!(out, "// Generated by build.rs from panel.toml").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Panel configuration from panel.toml").unwrap();
    writeln!(
        out,
        "pub const PANEL: flipdot_core::config::PanelConfig = flipdot_core::config::PanelConfig {{"
    )
    .unwrap();
    writeln!(
        out,
        "    geometry: flipdot_core::Geometry::new({}, {}),",
        config.geometry.width, config.geometry.height
    )
    .unwrap();
    writeln!(out, "    timing: flipdot_core::config::TimingConfig {{").unwrap();
    writeln!(out, "        step_hold_us: {},", config.timing.step_hold_us).unwrap();
    writeln!(out, "        commit_hold_us: {},", config.timing.commit_hold_us).unwrap();
    writeln!(out, "        frame_interval_ms: {},", config.timing.frame_interval_ms).unwrap();
    writeln!(out, "    }},").unwrap();
    writeln!(out, "    pins: flipdot_core::config::PinMap {{").unwrap();
    for (name, pin) in pin_entries(config) {
        writeln!(out, "        {}: {},", name, pin_literal(pin)).unwrap();
    }
    writeln!(out, "    }},").unwrap();
    writeln!(out, "}};").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "/// Frame buffer capacity in bytes").unwrap();
    writeln!(out, "pub const FRAME_BYTES: usize = {};", config.geometry.byte_len()).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "/// Take the configured control pins from the peripherals").unwrap();
    writeln!(
        out,
        "pub fn take_panel_pins(p: embassy_rp::Peripherals) -> flipdot_hal_rp2040::PanelPins<'static> {{"
    )
    .unwrap();
    writeln!(out, "    flipdot_hal_rp2040::PanelPins {{").unwrap();
    for (name, pin) in pin_entries(config) {
        writeln!(
            out,
            "        {}: embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from(p.PIN_{}),",
            name, pin.pin
        )
        .unwrap();
    }
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("panel_config.rs"), out).unwrap();
}

fn pin_entries(config: &PanelConfig) -> [(&'static str, PinConfig); 5] {
    let pins = &config.pins;
    [
        ("column", pins.column),
        ("row", pins.row),
        ("polarity", pins.polarity),
        ("reset", pins.reset),
        ("commit", pins.commit),
    ]
}

fn pin_literal(pin: PinConfig) -> String {
    format!(
        "flipdot_core::config::PinConfig {{ pin: {}, inverted: {} }}",
        pin.pin, pin.inverted
    )
}
