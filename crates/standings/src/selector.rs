use crate::model::ScoredRace;

/// Number of best results that count toward a season total: half the races
/// held, rounded up. Identical for every runner in the series/year.
pub fn qualifying_races_needed(races_held: usize) -> usize {
    races_held.div_ceil(2)
}

/// Orders a runner's scored races into selection order: points descending,
/// then race date ascending, then race id. The secondary keys do not affect
/// the counted sum but pin down *which* races are counted, so that the
/// distance/time tie-breakers and rerun-idempotence are deterministic.
pub fn sort_for_selection(races: &mut [ScoredRace]) {
    races.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.race_date.cmp(&b.race_date))
            .then_with(|| a.race_id.cmp(&b.race_id))
    });
}

/// Sum of the first `q` entries of a selection-ordered list.
pub fn counted_total(races: &[ScoredRace], q: usize) -> i32 {
    races.iter().take(q).map(|r| r.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn scored(points: i32, day: u32) -> ScoredRace {
        ScoredRace {
            race_id: Uuid::new_v4(),
            race_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            distance_miles: None,
            finish_time: None,
            points,
        }
    }

    #[test]
    fn q_is_ceil_of_half() {
        assert_eq!(qualifying_races_needed(1), 1);
        assert_eq!(qualifying_races_needed(3), 2);
        assert_eq!(qualifying_races_needed(4), 2);
        assert_eq!(qualifying_races_needed(12), 6);
    }

    #[test]
    fn selection_orders_points_descending() {
        let mut races = vec![scored(3, 1), scored(10, 2), scored(7, 3)];
        sort_for_selection(&mut races);
        let points: Vec<i32> = races.iter().map(|r| r.points).collect();
        assert_eq!(points, vec![10, 7, 3]);
    }

    #[test]
    fn equal_points_break_by_earlier_date() {
        let mut races = vec![scored(8, 20), scored(8, 5)];
        sort_for_selection(&mut races);
        assert_eq!(races[0].race_date, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
    }

    #[test]
    fn total_is_top_q_subset_sum() {
        let mut races = vec![scored(10, 1), scored(9, 2), scored(0, 3)];
        sort_for_selection(&mut races);
        let q = qualifying_races_needed(3);
        let total = counted_total(&races, q);
        assert_eq!(total, 19);

        // Top-Q beats every other Q-sized subset and never exceeds the full sum.
        let all: i32 = races.iter().map(|r| r.points).sum();
        assert!(total <= all);
        for skip in 0..races.len() {
            let alt: i32 = races
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .take(q)
                .map(|(_, r)| r.points)
                .sum();
            assert!(alt <= total);
        }
    }

    #[test]
    fn fewer_races_than_q_sums_what_exists() {
        let races = vec![scored(6, 1)];
        assert_eq!(counted_total(&races, 4), 6);
    }
}
