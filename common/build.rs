// Stamps the crate with a build version ("<pkg version>-<short commit hash>")
// so logs and API handshakes can report the exact build.

use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    // Release tarballs build without a .git directory; CI passes the hash in
    let commit = match option_env!("DET_COMMIT_HASH") {
        Some(hash) => hash.chars().take(7).collect(),
        None => git_short_hash().unwrap_or_else(|| "unknown".to_string()),
    };

    println!("cargo:rerun-if-env-changed=BUILD_VERSION");
    println!(
        "cargo:rustc-env=BUILD_VERSION={}-{}",
        env!("CARGO_PKG_VERSION"),
        commit
    );
}
