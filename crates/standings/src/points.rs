use crate::model::{ResultRecord, ScoringCategory};

/// Deepest placement that still earns points.
pub const MAX_SCORING_PLACE: i32 = 10;

/// Place-to-points table: 1st earns 10, 10th earns 1, anything deeper earns
/// nothing. Non-positive places earn nothing.
pub fn points_for_place(place: i32) -> i32 {
    if (1..=MAX_SCORING_PLACE).contains(&place) {
        (MAX_SCORING_PLACE + 1) - place
    } else {
        0
    }
}

/// The gender-relative place a category scores on: place among all finishers
/// of the gender for Overall, place within the gender's age-group for
/// AgeGroup.
pub fn category_place(result: &ResultRecord, category: ScoringCategory) -> i32 {
    match category {
        ScoringCategory::Overall => result.place_gender,
        ScoringCategory::AgeGroup => result.place_age_group,
    }
}

/// Points one result earns in one category. DNF and DQ zero out before any
/// place field is read; those fields may hold stale placeholder values.
pub fn points_for_result(result: &ResultRecord, category: ScoringCategory) -> i32 {
    if !result.is_finished() {
        return 0;
    }
    points_for_place(category_place(result, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn result(place_gender: i32, place_age_group: i32) -> ResultRecord {
        ResultRecord {
            race_id: Uuid::new_v4(),
            registration_id: Uuid::new_v4(),
            place: place_gender,
            place_gender,
            place_age_group,
            gun_time: None,
            chip_time: None,
            is_dnf: false,
            is_dq: false,
        }
    }

    #[test]
    fn table_is_exact_for_top_ten() {
        let expected = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        for (place, want) in (1..=10).zip(expected) {
            assert_eq!(points_for_place(place), want);
        }
    }

    #[test]
    fn beyond_tenth_earns_nothing() {
        assert_eq!(points_for_place(11), 0);
        assert_eq!(points_for_place(250), 0);
    }

    #[test]
    fn non_positive_place_earns_nothing() {
        assert_eq!(points_for_place(0), 0);
        assert_eq!(points_for_place(-3), 0);
    }

    #[test]
    fn category_selects_its_place() {
        let r = result(4, 1);
        assert_eq!(points_for_result(&r, ScoringCategory::Overall), 7);
        assert_eq!(points_for_result(&r, ScoringCategory::AgeGroup), 10);
    }

    #[test]
    fn dnf_zeroes_despite_stray_place() {
        let mut r = result(4, 4);
        r.is_dnf = true;
        assert_eq!(points_for_result(&r, ScoringCategory::Overall), 0);
        assert_eq!(points_for_result(&r, ScoringCategory::AgeGroup), 0);
    }

    #[test]
    fn dq_zeroes_despite_stray_place() {
        let mut r = result(1, 1);
        r.is_dq = true;
        assert_eq!(points_for_result(&r, ScoringCategory::Overall), 0);
        assert_eq!(points_for_result(&r, ScoringCategory::AgeGroup), 0);
    }
}
