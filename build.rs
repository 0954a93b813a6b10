//! Build script for the tracescan CLI.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to the `.env` file the application reads at startup:
//! - Linux: `~/.local/share/tracescan/.env.example`
//! - macOS: `~/Library/Application Support/tracescan/.env.example`
//! - Windows: `%LOCALAPPDATA%/tracescan/.env.example`
//!
//! A missing template or an unwritable data directory only produces a cargo
//! warning; neither is a reason to fail the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("tracescan");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::read_to_string(&env_example_path))
        .and_then(|contents| fs::write(out_dir.join(".env.example"), contents));

    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
