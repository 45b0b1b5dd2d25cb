use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use standings::RaceRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Race {
    pub race_id: Uuid,
    pub series_id: Uuid,
    pub year: i32,
    pub name: String,
    pub race_date: chrono::NaiveDate,
    pub distance_miles: Option<Decimal>,
    pub series_order: i32,
}

impl From<&Race> for RaceRecord {
    fn from(row: &Race) -> RaceRecord {
        RaceRecord {
            race_id: row.race_id,
            race_date: row.race_date,
            distance_miles: row.distance_miles,
            series_order: row.series_order,
        }
    }
}
