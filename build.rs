use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=NYLAS_SDK_VERSION");

    // An explicit version from the release pipeline wins over git
    if let Some(version) = std::env::var("NYLAS_SDK_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
    {
        println!("cargo:rustc-env=NYLAS_SDK_VERSION={}", version.trim());
        return;
    }

    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output();

    let package_version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();

    let version = match output {
        Ok(o) if o.status.success() => {
            let git_output = String::from_utf8(o.stdout)
                .unwrap_or_default()
                .trim()
                .to_string();

            // "v1.2.0" -> "1.2.0"
            let version = git_output.strip_prefix('v').unwrap_or(&git_output);

            if version.is_empty() {
                package_version
            } else if version.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                version.to_string()
            } else {
                // Untagged repository: describe prints a bare commit hash
                format!("{}+{}", package_version, version)
            }
        }
        _ => package_version,
    };

    println!("cargo:rustc-env=NYLAS_SDK_VERSION={}", version);
}
