//! Source tree archiving: walk a directory and pack every file into a
//! deflate-compressed ZIP.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Pack every regular file under `source_dir` into a new ZIP at
/// `archive_path`.
///
/// Entry names are recorded exactly as the walk produced them (the path
/// rooted at the process working directory), not re-rooted relative to
/// `source_dir`. Downstream update clients expect this archive layout, so
/// the walked path must be preserved verbatim.
///
/// No filtering is applied: hidden files are included, symlinks are
/// followed, empty directories contribute no entries. A missing source
/// directory or a dangling symlink surfaces the underlying I/O error.
pub fn create_archive(source_dir: &Path, archive_path: &Path) -> Result<()> {
    let out = File::create(archive_path)
        .with_context(|| format!("creating archive '{}'", archive_path.display()))?;
    let mut writer = ZipWriter::new(out);
    // Fixed entry mtime keeps re-runs over an unchanged tree byte-identical.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    // Collect paths deterministically.
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(source_dir).follow_links(true) {
        let entry = entry
            .with_context(|| format!("walking source directory '{}'", source_dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();

    for path in files {
        let name = path.to_string_lossy().replace('\\', "/");
        writer
            .start_file(name, options)
            .with_context(|| format!("starting archive entry for '{}'", path.display()))?;
        let mut src =
            File::open(&path).with_context(|| format!("opening '{}'", path.display()))?;
        io::copy(&mut src, &mut writer)
            .with_context(|| format!("compressing '{}'", path.display()))?;
    }

    writer
        .finish()
        .with_context(|| format!("finalizing archive '{}'", archive_path.display()))?;
    Ok(())
}
