use std::{process::Command, env, path::Path};
use anyhow::{self, Context};

fn main() {
    let git_version = git_describe().unwrap_or_else(|err| {
        println!("cargo:warning=Falling back to package version: {err:#}");
        env::var("CARGO_PKG_VERSION").unwrap_or_default()
    });
    println!("Using GIT_VERSION={}", git_version);
    println!("cargo:rustc-env=GIT_VERSION={}", git_version);
    if Path::new(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
    }
}

fn git_describe() -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(&["describe", "--always"])
        .output().context("Failed to get git version")?;
    exit_ok(output.status)?;
    let version = String::from_utf8(output.stdout).context("git output is not UTF-8")?;
    let version = version.trim();
    if version.is_empty() {anyhow::bail!("git describe printed nothing")}
    Ok(version.to_owned())
}

fn exit_ok(status: std::process::ExitStatus) -> anyhow::Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(anyhow::format_err!("Exited with status {}", status.code().unwrap_or(-1)))
    }
}
