//! Builds `lockc-ebpf` for the `bpfel-unknown-none` target and copies
//! the resulting object into `OUT_DIR`, so `main.rs` can embed it with
//! `aya::include_bytes_aligned!`.

use std::path::PathBuf;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=../lockc-ebpf/src");
    println!("cargo:rerun-if-changed=../lockc-common/src");
    println!("cargo:rerun-if-changed=../lockc-core/src");

    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(std::path::Path::parent)
        .expect("lockc-loader should live at <workspace>/crates/lockc-loader")
        .to_path_buf();
    let ebpf_manifest = workspace_root.join("crates/lockc-ebpf/Cargo.toml");

    let status = Command::new("cargo")
        .args([
            "build",
            "--manifest-path",
            ebpf_manifest.to_str().expect("non-utf8 workspace path"),
            "--target",
            "bpfel-unknown-none",
            "-Z",
            "build-std=core",
            "--release",
        ])
        .status()
        .expect("failed to invoke cargo to build lockc-ebpf");

    if !status.success() {
        panic!("building lockc-ebpf for bpfel-unknown-none failed");
    }

    let built = workspace_root
        .join("crates/lockc-ebpf/target/bpfel-unknown-none/release/lockc-ebpf");
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    std::fs::copy(&built, out_dir.join("lockc-ebpf"))
        .unwrap_or_else(|e| panic!("failed to copy {}: {e}", built.display()));
}
