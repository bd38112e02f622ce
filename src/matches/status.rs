use chrono::{DateTime, Utc};

use crate::models::matches::MatchStatus;

/// Derive the status of a match from its schedule window.
///
/// Status is never accepted from clients; it is recomputed from the
/// timestamps whenever a row is written. Both window boundaries count as
/// live.
pub fn match_status_at(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> MatchStatus {
    if now < start_time {
        MatchStatus::Scheduled
    } else if now > end_time {
        MatchStatus::Finished
    } else {
        MatchStatus::Live
    }
}
