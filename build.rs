fn main() {
    // Add build-time information
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    println!("cargo:rustc-env=GIT_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_BRANCH={}", git_output(&["rev-parse", "--abbrev-ref", "HEAD"]));
}

fn git_output(args: &[&str]) -> String {
    std::process::Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
