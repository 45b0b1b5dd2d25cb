//! Batch orchestration: snapshot in, replacement standings set out.
//!
//! No single bad record aborts a run. Results pointing at unknown races or
//! registrations are dropped with a warning, malformed places are excluded
//! from scoring, and the run always emits a complete set for everything
//! well-formed. The only fatal input is a series with zero races held.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::eligibility;
use crate::error::{EngineError, Result};
use crate::model::{
    RaceRecord, RegistrationRecord, ResultRecord, RunWarnings, RunnerTally, ScoredRace,
    ScoringCategory, SeasonSnapshot, StandingsSet,
};
use crate::points;
use crate::rank;
use crate::selector;

/// Computes the full replacement standings set for one (series, year)
/// snapshot. Pure and deterministic: identical inputs (including
/// `calculated_at`) produce identical output.
pub fn compute_standings(
    snapshot: &SeasonSnapshot,
    calculated_at: NaiveDateTime,
) -> Result<StandingsSet> {
    if snapshot.races.is_empty() {
        return Err(EngineError::NoRacesHeld {
            series_id: snapshot.series_id,
            year: snapshot.year,
        });
    }

    let q = selector::qualifying_races_needed(snapshot.races.len());
    let races_by_id: HashMap<Uuid, &RaceRecord> =
        snapshot.races.iter().map(|r| (r.race_id, r)).collect();
    let registrations_by_id: HashMap<Uuid, &RegistrationRecord> = snapshot
        .registrations
        .iter()
        .map(|r| (r.registration_id, r))
        .collect();

    let mut warnings = RunWarnings::default();
    let mut results_by_registration: HashMap<Uuid, Vec<&ResultRecord>> = HashMap::new();

    for result in &snapshot.results {
        if !races_by_id.contains_key(&result.race_id) {
            warn!(
                race_id = %result.race_id,
                registration_id = %result.registration_id,
                "result references unknown race, dropping"
            );
            warnings.unknown_race += 1;
            continue;
        }
        let Some(registration) = registrations_by_id.get(&result.registration_id) else {
            warn!(
                race_id = %result.race_id,
                registration_id = %result.registration_id,
                "result references unknown registration, dropping"
            );
            warnings.unknown_registration += 1;
            continue;
        };
        if !registration.is_club_member {
            debug!(
                registration_id = %result.registration_id,
                "non-member finish recorded but excluded from standings"
            );
            continue;
        }
        // Counted once per result here, even when both category places are
        // bad; the per-category exclusion happens during tally building.
        if result.is_finished() && (result.place_gender < 1 || result.place_age_group < 1) {
            warn!(
                race_id = %result.race_id,
                registration_id = %result.registration_id,
                "non-positive place on a finished result, excluding from scoring"
            );
            warnings.malformed += 1;
        }
        results_by_registration
            .entry(result.registration_id)
            .or_default()
            .push(result);
    }

    let mut standings = Vec::new();
    for category in ScoringCategory::ALL {
        let mut tallies = Vec::new();
        // Iterate the snapshot's registration order, not the map, so the
        // tally list is built identically on every run.
        for registration in &snapshot.registrations {
            let Some(results) = results_by_registration.get(&registration.registration_id) else {
                continue;
            };
            tallies.push(build_tally(registration, results, &races_by_id, category, q));
        }
        standings.extend(rank::assign_ranks(tallies, category, q as u32, calculated_at));
    }

    Ok(StandingsSet {
        series_id: snapshot.series_id,
        year: snapshot.year,
        qualifying_races_needed: q as u32,
        standings,
        warnings,
    })
}

fn build_tally(
    registration: &RegistrationRecord,
    results: &[&ResultRecord],
    races_by_id: &HashMap<Uuid, &RaceRecord>,
    category: ScoringCategory,
    q: usize,
) -> RunnerTally {
    let mut races = Vec::new();
    let mut finished_places = HashMap::new();

    for &result in results {
        let race = races_by_id[&result.race_id];

        if result.is_finished() && result.place >= 1 {
            finished_places.insert(result.race_id, result.place);
        }

        if !eligibility::counts_for_category(registration, race, category) {
            debug!(
                registration_id = %registration.registration_id,
                race_id = %race.race_id,
                category = category.as_str(),
                "distance outside age-group cap, result excluded from category"
            );
            continue;
        }
        if result.is_finished() && points::category_place(result, category) < 1 {
            debug!(
                registration_id = %registration.registration_id,
                race_id = %race.race_id,
                category = category.as_str(),
                "non-positive place, result excluded from category scoring"
            );
            continue;
        }

        races.push(ScoredRace {
            race_id: race.race_id,
            race_date: race.race_date,
            distance_miles: race.distance_miles,
            finish_time: result.finish_time(),
            points: points::points_for_result(result, category),
        });
    }

    let latest_points = races
        .iter()
        .max_by_key(|r| (r.race_date, r.race_id))
        .map(|r| r.points);

    selector::sort_for_selection(&mut races);
    let total_points = selector::counted_total(&races, q);

    RunnerTally {
        registration_id: registration.registration_id,
        runner_id: registration.runner_id,
        gender: registration.gender,
        age_group: registration.age_group.clone(),
        qualifying_needed: q,
        races,
        finished_places,
        latest_points,
        races_participated: results.len() as u32,
        total_points,
    }
}
