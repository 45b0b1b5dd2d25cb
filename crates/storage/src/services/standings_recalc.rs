//! Recalculation trigger: gathers the season feeds, runs the engine, and
//! replaces the persisted standings set for one (series, year) as a single
//! logical unit. This is the one entry point the admin/API collaborator
//! calls.

use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::repository::{SeasonRepository, StandingsRepository};
use standings::{RunWarnings, SeasonSnapshot};

/// Outcome of one recalculation run. Skipped-record counts are surfaced to
/// the caller but never fail the run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecalcSummary {
    pub standings_written: u64,
    pub warnings: RunWarnings,
}

pub async fn recalculate(pool: &PgPool, series_id: Uuid, year: i32) -> Result<RecalcSummary> {
    let season = SeasonRepository::new(pool);
    let registrations = season.list_registrations(series_id, year).await?;
    let races = season.list_races(series_id, year).await?;
    let results = season.list_results(series_id, year).await?;

    let snapshot = SeasonSnapshot {
        series_id,
        year,
        registrations: registrations.iter().map(Into::into).collect(),
        races: races.iter().map(Into::into).collect(),
        results: results.iter().map(Into::into).collect(),
    };

    let set = standings::compute_standings(&snapshot, Utc::now().naive_utc())?;

    let standings_written = StandingsRepository::new(pool).replace_for_series(&set).await?;

    info!(
        %series_id,
        year,
        standings_written,
        qualifying_races_needed = set.qualifying_races_needed,
        unknown_race = set.warnings.unknown_race,
        unknown_registration = set.warnings.unknown_registration,
        malformed = set.warnings.malformed,
        "standings recalculated"
    );

    Ok(RecalcSummary {
        standings_written,
        warnings: set.warnings,
    })
}
