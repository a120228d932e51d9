//! XTask - build automation for Hawl
//!
//! # Usage
//! ```sh
//! cargo xtask dist-web       # Build the WASM package for the web app
//! cargo xtask test           # Run the workspace test suite
//! cargo xtask sync-versions  # Copy the workspace version into pkg/package.json
//! cargo xtask build-all      # Everything above
//! ```

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "dist-web" => dist_web()?,
        "test" => test_all()?,
        "sync-versions" => sync_versions()?,
        "build-all" => build_all()?,
        "-h" | "--help" | "help" => print_usage(),
        cmd => {
            eprintln!("❌ Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    println!(r#"
🌙 Hawl XTask - Build Automation

USAGE:
    cargo xtask <COMMAND>

COMMANDS:
    dist-web       Build WASM package for the web front-end
                   Output: pkg/

    test           Run all workspace tests (including property tests)

    sync-versions  Sync version from Cargo.toml to pkg/package.json

    build-all      Test, build release Rust and WASM
"#);
}

// =============================================================================
// Helper Functions
// =============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let root = PathBuf::from(manifest_dir)
        .parent()
        .context("Failed to find project root")?
        .to_path_buf();
    Ok(root)
}

fn run_cmd_in_dir(dir: &Path, cmd: &str, args: &[&str]) -> Result<()> {
    println!("  → [{}] {} {}", dir.display(), cmd, args.join(" "));

    let status = Command::new(cmd)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to start: {} {}", cmd, args.join(" ")))?;

    if !status.success() {
        bail!("Command '{}' failed with exit code: {:?}", cmd, status.code());
    }
    Ok(())
}

fn command_exists(cmd: &str) -> bool {
    let finder = if cfg!(windows) { "where" } else { "which" };
    Command::new(finder)
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn read_cargo_version(root: &Path) -> Result<String> {
    let content = fs::read_to_string(root.join("Cargo.toml"))?;

    for line in content.lines() {
        if line.trim().starts_with("version") && line.contains('=') {
            if let Some(version) = line.split('"').nth(1) {
                return Ok(version.to_string());
            }
        }
    }
    bail!("Could not find version in Cargo.toml")
}

/// Rewrites the `"version"` line of a JSON manifest, keeping its indentation.
fn update_json_version(content: &str, version: &str) -> String {
    content
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with("\"version\"") {
                let indent = &line[..line.len() - trimmed.len()];
                let comma = if trimmed.trim_end().ends_with(',') { "," } else { "" };
                format!("{}\"version\": \"{}\"{}", indent, version, comma)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tasks
// =============================================================================

fn sync_versions() -> Result<()> {
    let root = project_root()?;
    let version = read_cargo_version(&root)?;
    let pkg_json = root.join("pkg").join("package.json");

    println!("🔄 Syncing version {}...", version);
    if pkg_json.exists() {
        let content = fs::read_to_string(&pkg_json)?;
        fs::write(&pkg_json, update_json_version(&content, &version))?;
        println!("  ✅ Updated pkg/package.json");
    } else {
        println!("  ⏭️  pkg/package.json not built yet, skipping");
    }
    Ok(())
}

fn dist_web() -> Result<()> {
    println!("\n🕸️  Building WASM package...\n");

    let root = project_root()?;
    let wasm_dir = root.join("bindings").join("hawl_wasm");
    let pkg_dir = root.join("pkg");

    if !command_exists("wasm-pack") {
        println!("  ⚠️ wasm-pack not found. Installing...");
        run_cmd_in_dir(&root, "cargo", &["install", "wasm-pack"])?;
    }

    run_cmd_in_dir(&wasm_dir, "wasm-pack", &[
        "build",
        "--target", "web",
        "--out-dir", pkg_dir.to_string_lossy().as_ref(),
        "--out-name", "hawl",
    ])?;

    sync_versions()?;
    println!("\n✅ WASM build complete: pkg/");
    Ok(())
}

fn test_all() -> Result<()> {
    println!("\n🧪 Running workspace tests...\n");
    let root = project_root()?;
    run_cmd_in_dir(&root, "cargo", &["test", "--workspace"])
}

fn build_all() -> Result<()> {
    println!("\n🚀 Building all targets...\n");
    let root = project_root()?;

    test_all()?;
    run_cmd_in_dir(&root, "cargo", &["build", "--release", "-p", "hawl"])?;
    dist_web()?;

    println!("\n✅ All builds complete!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_json_version() {
        let input = "{\n  \"name\": \"hawl-wasm\",\n  \"version\": \"0.1.0\",\n  \"files\": []\n}";
        let output = update_json_version(input, "0.3.0");
        assert!(output.contains("  \"version\": \"0.3.0\","));
        assert!(output.contains("\"name\": \"hawl-wasm\""));
    }
}
