use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use standings::ResultRecord;

/// One registration's finish in one race, replaced whenever that race's
/// results are re-ingested. Unique per (race_id, registration_id). Times
/// are stored as whole seconds, already normalized by ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResult {
    pub result_id: Uuid,
    pub race_id: Uuid,
    pub registration_id: Uuid,
    pub place: i32,
    pub place_gender: i32,
    pub place_age_group: i32,
    pub gun_time_seconds: Option<i64>,
    pub chip_time_seconds: Option<i64>,
    pub is_dnf: bool,
    pub is_dq: bool,
}

fn seconds_to_duration(seconds: Option<i64>) -> Option<Duration> {
    seconds.filter(|s| *s >= 0).map(|s| Duration::from_secs(s as u64))
}

impl From<&RaceResult> for ResultRecord {
    fn from(row: &RaceResult) -> ResultRecord {
        ResultRecord {
            race_id: row.race_id,
            registration_id: row.registration_id,
            place: row.place,
            place_gender: row.place_gender,
            place_age_group: row.place_age_group,
            gun_time: seconds_to_duration(row.gun_time_seconds),
            chip_time: seconds_to_duration(row.chip_time_seconds),
            is_dnf: row.is_dnf,
            is_dq: row.is_dq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RaceResult {
        RaceResult {
            result_id: Uuid::new_v4(),
            race_id: Uuid::new_v4(),
            registration_id: Uuid::new_v4(),
            place: 12,
            place_gender: 4,
            place_age_group: 2,
            gun_time_seconds: Some(2711),
            chip_time_seconds: Some(2698),
            is_dnf: false,
            is_dq: false,
        }
    }

    #[test]
    fn times_map_to_durations() {
        let record = ResultRecord::from(&row());
        assert_eq!(record.gun_time, Some(Duration::from_secs(2711)));
        assert_eq!(record.chip_time, Some(Duration::from_secs(2698)));
    }

    #[test]
    fn negative_seconds_read_as_missing() {
        let mut bad = row();
        bad.gun_time_seconds = Some(-5);
        bad.chip_time_seconds = None;
        let record = ResultRecord::from(&bad);
        assert_eq!(record.gun_time, None);
        assert_eq!(record.finish_time(), None);
    }
}
