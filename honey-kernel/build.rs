//! Build script for honey-kernel
//!
//! - Validates kernel.toml at compile time
//! - Generates the `KERNEL_CONFIG` constant baked into the image

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use honey_core::config::{KernelConfig, DEFAULT_LABEL, DEFAULT_SIGNATURE};
use honey_core::fmt::Radix;
use honey_core::kernel::Banner;
use honey_protocol::TEXTMODE_BUFFER_LENGTH;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct KernelToml {
    #[serde(default)]
    banner: BannerSection,
    #[serde(default)]
    counter: CounterSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BannerSection {
    icon: bool,
    signature: String,
    label: String,
}

impl Default for BannerSection {
    fn default() -> Self {
        Self {
            icon: true,
            signature: DEFAULT_SIGNATURE.into(),
            label: DEFAULT_LABEL.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CounterSection {
    radix: i64,
}

impl Default for CounterSection {
    fn default() -> Self {
        Self { radix: 10 }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let config = load_config();
    validate_banner(&config.banner);
    validate_counter(&config.counter);
    write_config(&config);
}

/// Read and parse kernel.toml
fn load_config() -> KernelToml {
    // Re-run if kernel.toml changes
    println!("cargo:rerun-if-changed=kernel.toml");

    let config_path = Path::new("kernel.toml");

    // Missing file means the stock splash screen
    if !config_path.exists() {
        println!("cargo:warning=kernel.toml not found, using the stock configuration");
        return KernelToml::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read kernel.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid kernel.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
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

/// Panic with a boxed list of errors, if there are any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate the [banner] section
fn validate_banner(banner: &BannerSection) {
    let mut errors = Vec::new();

    // The host reads pushed text up to the first zero byte
    if banner.signature.contains('\0') {
        errors.push("[banner] signature must not contain NUL".to_string());
    }
    if banner.label.contains('\0') {
        errors.push("[banner] label must not contain NUL".to_string());
    }

    // Measured the way the kernel composes it, icon included
    let config = KernelConfig {
        icon: banner.icon,
        signature: &banner.signature,
        label: &banner.label,
        radix: Radix::DECIMAL,
    };
    if !Banner::fits(&config) {
        errors.push(format!(
            "[banner] banner is {} bytes, limit {}",
            Banner::required_len(&config),
            TEXTMODE_BUFFER_LENGTH
        ));
    }

    report("Invalid banner configuration", &errors);

    if banner.label.is_empty() {
        println!("cargo:warning=[banner] label is empty, the counter will follow the signature line");
    }
}

/// Validate the [counter] section
fn validate_counter(counter: &CounterSection) {
    let mut errors = Vec::new();

    let radix = u32::try_from(counter.radix).ok().and_then(Radix::new);
    if radix.is_none() {
        errors.push(format!(
            "[counter] radix must be {}-{}, got {}",
            Radix::MIN,
            Radix::MAX,
            counter.radix
        ));
    }

    report("Invalid counter configuration", &errors);
}

/// Generate `kernel_config.rs` in OUT_DIR
fn write_config(config: &KernelToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let source = format!(
        "/// Configuration baked in from kernel.toml\n\
         pub const KERNEL_CONFIG: KernelConfig<'static> = KernelConfig {{\n    \
             icon: {icon},\n    \
             signature: {signature:?},\n    \
             label: {label:?},\n    \
             radix: match Radix::new({radix}) {{\n        \
                 Some(radix) => radix,\n        \
                 None => panic!(\"kernel.toml radix out of range\"),\n    \
             }},\n\
         }};\n",
        icon = config.banner.icon,
        signature = config.banner.signature,
        label = config.banner.label,
        radix = config.counter.radix,
    );

    let path = out_dir.join("kernel_config.rs");
    if let Err(e) = fs::write(&path, source) {
        panic!("failed to write {}: {}", path.display(), e);
    }
}
