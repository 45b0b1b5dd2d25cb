//! Rank assignment: one stable sort per category, then renumbered views.
//!
//! Every rank field comes from the same established order. Gender and
//! (gender, age-group) ranks are filtered renumberings of it, never
//! independent re-sorts, so all three stay consistent with one tie-break
//! resolution.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::model::{Gender, RunnerTally, ScoringCategory, SeriesStanding};
use crate::tiebreak;

/// Sorts the tallies for one category and assigns overall, gender and
/// age-group ranks from the resulting order. Returns a fresh collection;
/// nothing is mutated in place.
pub fn assign_ranks(
    mut tallies: Vec<RunnerTally>,
    category: ScoringCategory,
    qualifying_races_needed: u32,
    calculated_at: NaiveDateTime,
) -> Vec<SeriesStanding> {
    tallies.sort_by(tiebreak::rank_order);

    let mut gender_seen: HashMap<Gender, u32> = HashMap::new();
    let mut age_group_seen: HashMap<(Gender, String), u32> = HashMap::new();

    tallies
        .into_iter()
        .enumerate()
        .map(|(index, tally)| {
            let gender_rank = gender_seen.entry(tally.gender).or_insert(0);
            *gender_rank += 1;
            let age_group_rank = age_group_seen
                .entry((tally.gender, tally.age_group.clone()))
                .or_insert(0);
            *age_group_rank += 1;

            SeriesStanding {
                registration_id: tally.registration_id,
                runner_id: tally.runner_id,
                category,
                gender: tally.gender,
                age_group: tally.age_group.clone(),
                qualifying_races_needed,
                races_participated: tally.races_participated,
                counted_race_points: tally.counted().iter().map(|r| r.points).collect(),
                total_points: tally.total_points,
                overall_rank: index as u32 + 1,
                gender_rank: *gender_rank,
                age_group_rank: *age_group_rank,
                last_calculated_at: calculated_at,
            }
        })
        .collect()
}
