//! Artifact naming and feed date/time formatting.

use time::{Date, OffsetDateTime};

/// Artifact file name: `<prefix>MM.DD.YYYY.zip`, zero-padded month and day.
pub fn artifact_file_name(prefix: &str, date: Date) -> String {
    format!(
        "{prefix}{:02}.{:02}.{:04}.zip",
        date.month() as u8,
        date.day(),
        date.year()
    )
}

/// Release date field of the feed: `YYYYMMDD`.
pub fn release_date(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Feed timestamp: `YYYY-MM-DDTHH:MM:SS.000Z`.
///
/// The milliseconds field is always the literal `000`, never the actual
/// sub-second time. The update-feed reader matches on this exact string
/// shape, so it is preserved verbatim.
pub fn feed_timestamp(now_utc: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.000Z",
        now_utc.year(),
        now_utc.month() as u8,
        now_utc.day(),
        now_utc.hour(),
        now_utc.minute(),
        now_utc.second()
    )
}
