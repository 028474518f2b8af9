//! Build script for word-duel
//!
//! Exposes build metadata to `word_duel::build_info()`.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let build_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=WORD_DUEL_BUILD_TIME={}", build_time);

    let git_hash = command_output("git", &["rev-parse", "--short", "HEAD"]);
    println!("cargo:rustc-env=WORD_DUEL_GIT_HASH={}", git_hash);

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rust_version = command_output(&rustc, &["--version"]);
    println!("cargo:rustc-env=WORD_DUEL_RUST_VERSION={}", rust_version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.toml");
}

/// Trimmed stdout of a command, or "unknown"
fn command_output(program: &str, args: &[&str]) -> String {
    if std::env::var("DOCS_RS").is_ok() {
        return "docs-rs".to_string();
    }

    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
