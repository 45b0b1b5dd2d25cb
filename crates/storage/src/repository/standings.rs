use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::SeriesStandingRow;
use standings::StandingsSet;

/// Write side of the persistence contract: the standings set for a
/// (series, year) is replaced as a single logical unit.
pub struct StandingsRepository<'a> {
    pool: &'a PgPool,
}

/// Folds a series id into the 32-bit advisory-lock keyspace. Stable across
/// runs and processes so concurrent recomputations of the same series
/// serialize on the same lock.
fn advisory_lock_key(series_id: Uuid) -> i32 {
    let bits = series_id.as_u128();
    (bits as i32) ^ ((bits >> 32) as i32) ^ ((bits >> 64) as i32) ^ ((bits >> 96) as i32)
}

impl<'a> StandingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Deletes and reinserts the full standings set inside one transaction.
    /// A transaction-scoped advisory lock on (series, year) serializes
    /// concurrent recomputations; an interleaved delete/insert could
    /// otherwise leave a partially overwritten or duplicated set.
    pub async fn replace_for_series(&self, set: &StandingsSet) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1, $2)")
            .bind(advisory_lock_key(set.series_id))
            .bind(set.year)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM series_standings WHERE series_id = $1 AND year = $2")
            .bind(set.series_id)
            .bind(set.year)
            .execute(&mut *tx)
            .await?;

        let mut written = 0u64;
        for standing in &set.standings {
            sqlx::query(
                r#"
                INSERT INTO series_standings
                    (standing_id, registration_id, series_id, year, category,
                     qualifying_races_needed, races_participated, counted_race_points,
                     total_points, overall_rank, gender_rank, age_group_rank,
                     last_calculated_at)
                VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#,
            )
            .bind(standing.registration_id)
            .bind(set.series_id)
            .bind(set.year)
            .bind(standing.category.as_str())
            .bind(standing.qualifying_races_needed as i32)
            .bind(standing.races_participated as i32)
            .bind(&standing.counted_race_points)
            .bind(standing.total_points)
            .bind(standing.overall_rank as i32)
            .bind(standing.gender_rank as i32)
            .bind(standing.age_group_rank as i32)
            .bind(standing.last_calculated_at)
            .execute(&mut *tx)
            .await?;
            written += 1;
        }

        tx.commit().await?;
        Ok(written)
    }

    pub async fn list_for_series(
        &self,
        series_id: Uuid,
        year: i32,
        category: &str,
    ) -> Result<Vec<SeriesStandingRow>> {
        let rows = sqlx::query_as::<_, SeriesStandingRow>(
            r#"
            SELECT standing_id, registration_id, series_id, year, category,
                   qualifying_races_needed, races_participated, counted_race_points,
                   total_points, overall_rank, gender_rank, age_group_rank,
                   last_calculated_at
            FROM series_standings
            WHERE series_id = $1 AND year = $2 AND category = $3
            ORDER BY overall_rank
            "#,
        )
        .bind(series_id)
        .bind(year)
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
