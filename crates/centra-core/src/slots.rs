//! Network time: seconds elapsed since the Centra epoch.
//!
//! Transaction timestamps use this clock, never raw Unix time.

use chrono::Utc;

use crate::constants::EPOCH_TIMESTAMP;
use crate::types::Timestamp;

/// Current network time.
pub fn epoch_time() -> Timestamp {
    epoch_time_at(Utc::now().timestamp())
}

/// Network time for a given Unix timestamp. Saturates at zero for
/// instants before the epoch.
pub fn epoch_time_at(unix_secs: i64) -> Timestamp {
    (unix_secs - EPOCH_TIMESTAMP).max(0) as Timestamp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_time_counts_from_network_epoch() {
        assert_eq!(epoch_time_at(EPOCH_TIMESTAMP), 0);
        assert_eq!(epoch_time_at(EPOCH_TIMESTAMP + 90), 90);
    }

    #[test]
    fn pre_epoch_instants_saturate() {
        assert_eq!(epoch_time_at(0), 0);
    }
}
