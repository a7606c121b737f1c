use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Copy the workspace `config.toml` next to the backend binary, where
/// `shared::config::load_config` looks for it.
fn main() {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let source = workspace_root.join(CONFIG_FILE);
    println!("cargo:rerun-if-changed={}", source.display());

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=cannot locate the target profile directory, {CONFIG_FILE} not copied");
        return;
    };

    if !source.exists() {
        println!("cargo:warning={CONFIG_FILE} not found at {:?}, the embedded default applies", source);
        return;
    }

    let dest = target_dir.join(CONFIG_FILE);
    if let Err(e) = fs::copy(&source, &dest) {
        panic!("failed to copy {CONFIG_FILE} to {:?}: {}", dest, e);
    }
}

/// `target/<profile>`, found by walking up from OUT_DIR
/// (`target/<profile>/build/<pkg>-<hash>/out`)
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
