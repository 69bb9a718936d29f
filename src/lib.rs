//! Release packaging pipeline for script distributions.
//!
//! Packages a source tree into a dated, deflate-compressed ZIP, publishes it
//! into a distribution directory, computes a streaming SHA-1 over the
//! published artifact, and renders an update-feed descriptor consumed by an
//! auto-update client.
//!
//! The pipeline is a single straight line:
//!
//! ```text
//! archive ──► publish ──► digest ──► descriptor render ──► descriptor publish
//! ```
//!
//! Data flows strictly forward; no stage reads back from a later one. Each
//! stage fully completes (including closing open file handles) before the
//! next begins. There is no retry, no partial-failure recovery, and no
//! transactional guarantee across stages: a run that dies midway leaves the
//! distribution directory with a stale or missing descriptor until the next
//! successful run.
//!
//! All wall-clock reads go through the [`clock::Clock`] trait so runs can be
//! made deterministic under test.

pub mod archive;
pub mod clock;
pub mod config;
pub mod descriptor;
pub mod digest;
pub mod naming;
pub mod pipeline;
pub mod publish;

pub use clock::{Clock, SystemClock};
pub use config::PackagerConfig;
pub use pipeline::{run, RunSummary};
