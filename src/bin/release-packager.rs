use anyhow::{bail, Context, Result};

use release_packager::{pipeline, PackagerConfig, SystemClock};

fn main() -> Result<()> {
    if std::env::args().nth(1).is_some() {
        bail!(
            "release-packager takes no arguments; paths are fixed conventions \
             (drop a packager.toml next to the invocation to override them)"
        );
    }

    let cwd = std::env::current_dir().context("resolving current directory")?;
    let config = PackagerConfig::load_or_default(&cwd)?;
    let summary = pipeline::run(&config, &SystemClock)?;

    println!(
        "[package] done; artifact '{}' sha1 {}",
        summary.artifact_path.display(),
        summary.sha1
    );
    Ok(())
}
