// Simple build script that copies static assets to `dist/` after wasm-pack build.
use std::env;
use std::path::Path;
use std::process::Command;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    // Only run the heavy wasm-pack build when targeting wasm32.
    let target = env::var("TARGET").unwrap_or_default();
    if target == "wasm32-unknown-unknown" {
        // wasm-pack is assumed available. If not, emit warning.
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web"])
            .status();

        if let Ok(st) = status {
            if !st.success() {
                println!("cargo:warning=wasm-pack build failed");
            }
        } else {
            println!("cargo:warning=wasm-pack not installed – skipping");
        }
    }

    // Copy static/ to dist/
    let static_dir = Path::new("static");
    if static_dir.exists() {
        std::fs::create_dir_all("dist").ok();
        let mut options = CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        if let Err(err) = copy(static_dir, "dist", &options) {
            println!("cargo:warning=failed to copy static assets: {err}");
        }
    }
}
