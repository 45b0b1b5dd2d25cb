use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Persisted standing for one (registration, category). The whole set for a
/// (series, year) is deleted and reinserted on every recalculation run,
/// never patched row by row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SeriesStandingRow {
    pub standing_id: Uuid,
    pub registration_id: Uuid,
    pub series_id: Uuid,
    pub year: i32,
    pub category: String,
    pub qualifying_races_needed: i32,
    pub races_participated: i32,
    pub counted_race_points: Vec<i32>,
    pub total_points: i32,
    pub overall_rank: i32,
    pub gender_rank: i32,
    pub age_group_rank: i32,
    pub last_calculated_at: chrono::NaiveDateTime,
}
