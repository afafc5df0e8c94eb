use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Layering rule: domain and protocol never depend on the player crate.
fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let packages = metadata["packages"]
        .as_array()
        .context("metadata has no packages")?;

    let lower_layers = ["escapade-domain", "escapade-protocol"];
    for package in packages {
        let name = package["name"].as_str().unwrap_or_default();
        if !lower_layers.contains(&name) {
            continue;
        }
        let depends_on_player = package["dependencies"]
            .as_array()
            .into_iter()
            .flatten()
            .any(|dep| dep["name"].as_str() == Some("escapade-player"));
        if depends_on_player {
            anyhow::bail!("{name} must not depend on escapade-player");
        }
    }

    println!("arch-check ok");
    Ok(())
}
