use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use standings::{Gender, RegistrationRecord};

/// A runner's enrollment in one series/year, with the runner's gender joined
/// in. Age, age-group and membership are frozen for the season when the row
/// is created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SeriesRegistration {
    pub registration_id: Uuid,
    pub runner_id: Uuid,
    pub series_id: Uuid,
    pub year: i32,
    pub bib: Option<i32>,
    pub age: i32,
    pub age_group: String,
    pub is_club_member: bool,
    pub gender: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<&SeriesRegistration> for RegistrationRecord {
    fn from(row: &SeriesRegistration) -> RegistrationRecord {
        RegistrationRecord {
            registration_id: row.registration_id,
            runner_id: row.runner_id,
            gender: Gender::parse(&row.gender),
            age: row.age,
            age_group: row.age_group.clone(),
            is_club_member: row.is_club_member,
        }
    }
}
