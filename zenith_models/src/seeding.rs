// Default seed for generators that have not been given one.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seed derived from the wall clock. Falls back to a fixed value if the
/// clock reads before the epoch.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()).rotate_left(32))
        .unwrap_or(0x5eed)
}
