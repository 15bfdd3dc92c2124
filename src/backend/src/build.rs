use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    // Tell Cargo to only rerun this build script if specific files change
    println!("cargo:rerun-if-changed=src/build.rs");
    println!("cargo:rerun-if-changed=../ui/dist");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/heads");

    println!("cargo:rustc-env=GIT_SHORT_REV={}", git_short_rev());

    // Generate embedded static files from the web shell dist folder
    generate_static_files().expect("failed to generate static files");
}

fn git_short_rev() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn generate_static_files() -> io::Result<()> {
    // Path to the web shell dist folder (relative to backend Cargo.toml)
    let ui_dist_path = Path::new("../ui/dist");

    let resource_path = if ui_dist_path.exists() {
        ui_dist_path.to_path_buf()
    } else {
        println!(
            "cargo:warning=web shell not found at {ui_dist_path:?}, embedding no static files"
        );
        let empty = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR set by cargo"))
            .join("empty-dist");
        std::fs::create_dir_all(&empty)?;
        empty
    };

    static_files::resource_dir(resource_path).build()
}
