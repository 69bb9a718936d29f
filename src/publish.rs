//! Moving outputs into the distribution directory.
//!
//! Both operations here are delete-then-replace, not atomic: a crash between
//! the delete and the write leaves the destination absent until the next
//! successful run. Callers treat the distribution directory as "rerun until
//! both outputs are current".

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Move a freshly built archive into the distribution directory, replacing
/// any prior artifact of the same name.
///
/// The distribution directory is assumed to exist; a missing one fails with
/// the underlying filesystem error. Archives from other dates are left
/// untouched.
pub fn publish_artifact(archive_path: &Path, dist_dir: &Path) -> Result<PathBuf> {
    let name = archive_path.file_name().with_context(|| {
        format!("archive path '{}' has no file name", archive_path.display())
    })?;
    let dest = dist_dir.join(name);

    if dest.exists() {
        fs::remove_file(&dest)
            .with_context(|| format!("removing prior artifact '{}'", dest.display()))?;
    }
    fs::rename(archive_path, &dest).with_context(|| {
        format!(
            "moving archive '{}' into '{}'",
            archive_path.display(),
            dist_dir.display()
        )
    })?;
    Ok(dest)
}

/// Write the rendered descriptor to its well-known path, replacing any
/// previous version.
pub fn publish_descriptor(text: &str, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_file(target)
            .with_context(|| format!("removing prior descriptor '{}'", target.display()))?;
    }
    fs::write(target, text)
        .with_context(|| format!("writing descriptor '{}'", target.display()))
}
