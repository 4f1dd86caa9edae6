use crate::layout::{BIT_LEN_IGNORED_TIME, MASK_INTERVAL};
use chrono::prelude::*;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Convert a `DateTime<Utc>` to nanoseconds since the unix epoch.
///
/// Unlike `timestamp_nanos_opt` this covers the full `chrono` range.
pub(crate) fn to_unix_nanos(time: DateTime<Utc>) -> i128 {
    i128::from(time.timestamp()) * NANOS_PER_SECOND + i128::from(time.timestamp_subsec_nanos())
}

/// Convert nanoseconds since the unix epoch back to a `DateTime<Utc>`.
pub(crate) fn from_unix_nanos(nanos: i128) -> DateTime<Utc> {
    let secs = nanos.div_euclid(NANOS_PER_SECOND) as i64;
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as u32;
    DateTime::from_timestamp(secs, subsec).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Returns the number of whole intervals between `epoch_origin` and `now`.
///
/// The count is not wrapped; an origin in the future yields a negative count.
pub(crate) fn elapsed_intervals(now: i128, epoch_origin: i128) -> i64 {
    ((now - epoch_origin) >> BIT_LEN_IGNORED_TIME) as i64
}

/// Returns the current elapsed interval count for `epoch_origin`.
pub(crate) fn current_elapsed_intervals(epoch_origin: i128) -> i64 {
    elapsed_intervals(to_unix_nanos(Utc::now()), epoch_origin)
}

/// Project an elapsed interval count onto the 32 bit interval field.
/// The field wraps once every ~146 years.
pub(crate) fn interval_field(elapsed: i64) -> u64 {
    (elapsed as u64) & MASK_INTERVAL
}
