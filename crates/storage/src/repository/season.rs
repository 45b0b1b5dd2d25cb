use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Race, RaceResult, SeriesRegistration};

/// Read side of the persistence contract: the three input feeds for one
/// (series, year), in deterministic order.
pub struct SeasonRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_registrations(
        &self,
        series_id: Uuid,
        year: i32,
    ) -> Result<Vec<SeriesRegistration>> {
        let registrations = sqlx::query_as::<_, SeriesRegistration>(
            r#"
            SELECT sr.registration_id, sr.runner_id, sr.series_id, sr.year, sr.bib,
                   sr.age, sr.age_group, sr.is_club_member, r.gender, sr.created_at
            FROM series_registrations sr
            INNER JOIN runners r ON r.runner_id = sr.runner_id
            WHERE sr.series_id = $1 AND sr.year = $2
            ORDER BY sr.registration_id
            "#,
        )
        .bind(series_id)
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    pub async fn list_races(&self, series_id: Uuid, year: i32) -> Result<Vec<Race>> {
        let races = sqlx::query_as::<_, Race>(
            r#"
            SELECT race_id, series_id, year, name, race_date, distance_miles, series_order
            FROM races
            WHERE series_id = $1 AND year = $2
            ORDER BY series_order, race_date, race_id
            "#,
        )
        .bind(series_id)
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Ok(races)
    }

    pub async fn list_results(&self, series_id: Uuid, year: i32) -> Result<Vec<RaceResult>> {
        let results = sqlx::query_as::<_, RaceResult>(
            r#"
            SELECT rr.result_id, rr.race_id, rr.registration_id, rr.place, rr.place_gender,
                   rr.place_age_group, rr.gun_time_seconds, rr.chip_time_seconds,
                   rr.is_dnf, rr.is_dq
            FROM race_results rr
            INNER JOIN races ra ON ra.race_id = rr.race_id
            WHERE ra.series_id = $1 AND ra.year = $2
            ORDER BY rr.result_id
            "#,
        )
        .bind(series_id)
        .bind(year)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }
}
