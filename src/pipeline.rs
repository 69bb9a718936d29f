//! The five-stage packaging pipeline.
//!
//! Archive, publish, digest, render, publish descriptor — in that order,
//! each stage completing before the next begins. There are no loops or
//! retries; the only conditional behavior is the pair of existence checks
//! inside [`crate::publish`].

use std::path::PathBuf;

use anyhow::Result;

use crate::clock::Clock;
use crate::config::PackagerConfig;
use crate::descriptor::{self, FeedValues};
use crate::{archive, digest, naming, publish};

/// Outputs of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Published archive inside the distribution directory.
    pub artifact_path: PathBuf,
    /// Published descriptor inside the distribution directory.
    pub descriptor_path: PathBuf,
    /// Lowercase hex SHA-1 of the published archive.
    pub sha1: String,
}

/// Run the full pipeline.
///
/// The archive is created in the current working directory under its dated
/// name, then moved into the distribution directory. The artifact name is
/// derived from the local date at run start; the feed timestamp from UTC.
pub fn run(config: &PackagerConfig, clock: &dyn Clock) -> Result<RunSummary> {
    let today = clock.now_local().date();
    let file_name = naming::artifact_file_name(&config.artifact_prefix, today);

    println!(
        "[package:archive] packing '{}' into '{}'",
        config.source_dir.display(),
        file_name
    );
    let staged = PathBuf::from(&file_name);
    archive::create_archive(&config.source_dir, &staged)?;

    let artifact_path = publish::publish_artifact(&staged, &config.dist_dir)?;
    println!(
        "[package:publish] artifact at '{}'",
        artifact_path.display()
    );

    let sha1 = digest::sha1_file(&artifact_path)?;
    println!("[package:digest] sha1 {sha1}");

    let template = descriptor::load_template(&config.template_path)?;
    let rendered = descriptor::render(
        &template,
        &FeedValues {
            file_name,
            sha1: sha1.clone(),
            release_date: naming::release_date(today),
            timestamp: naming::feed_timestamp(clock.now_utc()),
        },
    );

    let descriptor_path = config.dist_dir.join(&config.descriptor_name);
    publish::publish_descriptor(&rendered, &descriptor_path)?;
    println!(
        "[package:descriptor] feed at '{}'",
        descriptor_path.display()
    );

    Ok(RunSummary {
        artifact_path,
        descriptor_path,
        sha1,
    })
}
