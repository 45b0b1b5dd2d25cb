use rust_decimal::Decimal;

use crate::model::{RaceRecord, RegistrationRecord, ScoringCategory};

/// Longest distance a runner of the given season age may score in the
/// age-group category. `None` means unrestricted.
///
/// 0-14: 10K-equivalent (6.21 mi); 15-19: 10 mi; 20 and up: any distance.
pub fn distance_cap_for_age(age: i32) -> Option<Decimal> {
    if age <= 14 {
        Some(Decimal::new(621, 2))
    } else if age <= 19 {
        Some(Decimal::new(10, 0))
    } else {
        None
    }
}

/// Whether a result in this race may score in the given category for this
/// registration. Overall scoring has no distance restriction; age-group
/// scoring applies the age-based distance cap. A race with no recorded
/// distance cannot be shown to violate a cap and is allowed.
pub fn counts_for_category(
    registration: &RegistrationRecord,
    race: &RaceRecord,
    category: ScoringCategory,
) -> bool {
    match category {
        ScoringCategory::Overall => true,
        ScoringCategory::AgeGroup => match (distance_cap_for_age(registration.age), race.distance_miles) {
            (Some(cap), Some(distance)) => distance <= cap,
            _ => true,
        },
    }
}
