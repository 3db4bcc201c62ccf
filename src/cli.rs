//! Command-line interface definition.

use clap::Parser;
use std::env;
use std::path::Path;

/// IPv4 subnet calculator: prints netmask, wildcard, network, broadcast
/// and host range for a CIDR.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CIDR to analyze, e.g. 192.168.34.27/24
    pub cidr: String,
}

/// Usage block printed on argument-count mistakes. Labels are padded so
/// both program-name columns align.
pub fn usage(prog: &str) -> String {
    format!("  Usage:   {prog} CIDR\n  Example: {prog} 192.168.34.27/24\n")
}

/// Basename of argv[0], falling back to the package name.
pub fn program_name() -> String {
    let arg0 = env::args().next().unwrap_or_default();
    Path::new(&arg0)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(env!("CARGO_PKG_NAME"))
        .to_string()
}
