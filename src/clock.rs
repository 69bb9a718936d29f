//! Injectable time source.
//!
//! The pipeline derives the artifact name from the local date and the feed
//! timestamp from UTC. Both reads go through this trait so tests can supply
//! a fixed instant instead of wall-clock time.

use time::OffsetDateTime;

/// Source of the current time for a packaging run.
pub trait Clock {
    /// Current instant in UTC.
    fn now_utc(&self) -> OffsetDateTime;

    /// Current instant in the local timezone.
    fn now_local(&self) -> OffsetDateTime;
}

/// Wall-clock implementation used by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn now_local(&self) -> OffsetDateTime {
        // Falls back to UTC when the local offset cannot be determined
        // (e.g. multi-threaded processes on some Unixes).
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Clock pinned to a single instant, for deterministic pipeline runs.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub OffsetDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        self.0
    }

    fn now_local(&self) -> OffsetDateTime {
        self.0
    }
}
