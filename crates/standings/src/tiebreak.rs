//! Tie-break cascade for equal season totals.
//!
//! Five rules applied in strict order; the first non-equal comparison wins.
//! A final registration-id comparison makes the order total, so no pair is
//! ever left to sort-implementation order.

use std::cmp::Ordering;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::model::RunnerTally;

/// Full rank ordering for two tallies in the same category: season total
/// descending, then the tie-break cascade. `Less` means `a` ranks ahead.
pub fn rank_order(a: &RunnerTally, b: &RunnerTally) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| break_tie(a, b))
}

/// The cascade alone, for two runners whose totals are already known equal.
pub fn break_tie(a: &RunnerTally, b: &RunnerTally) -> Ordering {
    head_to_head(a, b)
        .then_with(|| next_best_race(a, b))
        .then_with(|| counted_distance(a, b))
        .then_with(|| counted_time(a, b))
        .then_with(|| most_recent_race(a, b))
        .then_with(|| a.registration_id.cmp(&b.registration_id))
}

/// Rule 1, head-to-head: among races both runners finished, whoever beat the other (by overall
/// place) more often ranks ahead.
fn head_to_head(a: &RunnerTally, b: &RunnerTally) -> Ordering {
    let mut a_wins = 0u32;
    let mut b_wins = 0u32;
    for (race_id, a_place) in &a.finished_places {
        if let Some(b_place) = b.finished_places.get(race_id) {
            match a_place.cmp(b_place) {
                Ordering::Less => a_wins += 1,
                Ordering::Greater => b_wins += 1,
                Ordering::Equal => {}
            }
        }
    }
    b_wins.cmp(&a_wins)
}

/// Rule 2, next-best race: walk the non-counting races in selection order (index Q, Q+1, ...);
/// the first index where the point values differ decides. A runner with no
/// race at an index reads as zero there.
fn next_best_race(a: &RunnerTally, b: &RunnerTally) -> Ordering {
    let start = a.qualifying_needed.min(b.qualifying_needed);
    let end = a.races.len().max(b.races.len());
    for index in start..end {
        let ordering = b.points_at(index).cmp(&a.points_at(index));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Rule 3: higher total distance across counted races. A race with no recorded
/// distance contributes zero rather than voiding the comparison.
fn counted_distance(a: &RunnerTally, b: &RunnerTally) -> Ordering {
    let sum = |t: &RunnerTally| -> Decimal {
        t.counted().iter().filter_map(|r| r.distance_miles).sum()
    };
    sum(b).cmp(&sum(a))
}

/// Rule 4: lower total finish time across counted races, gun time falling back
/// to chip. A race with neither time recorded contributes zero.
fn counted_time(a: &RunnerTally, b: &RunnerTally) -> Ordering {
    let sum = |t: &RunnerTally| -> Duration {
        t.counted().iter().filter_map(|r| r.finish_time).sum()
    };
    sum(a).cmp(&sum(b))
}

/// Rule 5: higher points in the chronologically latest eligible result. If
/// either runner has none, the pair stays tied here.
fn most_recent_race(a: &RunnerTally, b: &RunnerTally) -> Ordering {
    match (a.latest_points, b.latest_points) {
        (Some(a_points), Some(b_points)) => b_points.cmp(&a_points),
        _ => Ordering::Equal,
    }
}
