use std::collections::HashMap;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Lenient parse of the gender strings the ingestion side records.
    /// Unknown values fall back to `Male`, matching upstream result pages
    /// that only flag female fields explicitly.
    pub fn parse(value: &str) -> Gender {
        match value.to_uppercase().as_str() {
            "F" | "FEMALE" | "W" | "WOMEN" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

/// Scoring track. Overall uses gender place among all finishers, AgeGroup
/// uses gender place within the runner's age-group. The two tracks are
/// scored and ranked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringCategory {
    Overall,
    AgeGroup,
}

impl ScoringCategory {
    pub const ALL: [ScoringCategory; 2] = [ScoringCategory::Overall, ScoringCategory::AgeGroup];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringCategory::Overall => "overall",
            ScoringCategory::AgeGroup => "age_group",
        }
    }
}

/// One runner's enrollment in a series/year. Age, age-group and membership
/// are frozen for the season at registration time.
#[derive(Debug, Clone)]
pub struct RegistrationRecord {
    pub registration_id: Uuid,
    pub runner_id: Uuid,
    pub gender: Gender,
    pub age: i32,
    pub age_group: String,
    pub is_club_member: bool,
}

#[derive(Debug, Clone)]
pub struct RaceRecord {
    pub race_id: Uuid,
    pub race_date: NaiveDate,
    pub distance_miles: Option<Decimal>,
    pub series_order: i32,
}

/// One registration's finish in one race, pre-normalized by ingestion:
/// times already resolved to durations, flags already set.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub race_id: Uuid,
    pub registration_id: Uuid,
    pub place: i32,
    pub place_gender: i32,
    pub place_age_group: i32,
    pub gun_time: Option<Duration>,
    pub chip_time: Option<Duration>,
    pub is_dnf: bool,
    pub is_dq: bool,
}

impl ResultRecord {
    pub fn is_finished(&self) -> bool {
        !self.is_dnf && !self.is_dq
    }

    /// Gun time, falling back to chip time when the gun time is absent.
    pub fn finish_time(&self) -> Option<Duration> {
        self.gun_time.or(self.chip_time)
    }
}

/// Full input snapshot for one (series, year) computation run.
#[derive(Debug, Clone)]
pub struct SeasonSnapshot {
    pub series_id: Uuid,
    pub year: i32,
    pub registrations: Vec<RegistrationRecord>,
    pub races: Vec<RaceRecord>,
    pub results: Vec<ResultRecord>,
}

/// One race's contribution to a runner's category score, carrying what the
/// tie-break cascade needs (distance and finish time for the sum rules).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRace {
    pub race_id: Uuid,
    pub race_date: NaiveDate,
    pub distance_miles: Option<Decimal>,
    pub finish_time: Option<Duration>,
    pub points: i32,
}

/// Per-runner, per-category aggregate the rank assigner sorts. Built by the
/// engine, consumed by the tie-break comparator.
#[derive(Debug, Clone)]
pub struct RunnerTally {
    pub registration_id: Uuid,
    pub runner_id: Uuid,
    pub gender: Gender,
    pub age_group: String,
    pub qualifying_needed: usize,
    /// All eligible scored races, sorted points desc, then race date asc,
    /// then race id. The first `qualifying_needed` entries are counted.
    pub races: Vec<ScoredRace>,
    /// Overall place per race, finished races only. Used for head-to-head.
    pub finished_places: HashMap<Uuid, i32>,
    /// Points of the chronologically latest eligible result, if any.
    pub latest_points: Option<i32>,
    pub races_participated: u32,
    pub total_points: i32,
}

impl RunnerTally {
    /// The counted (best-Q) races.
    pub fn counted(&self) -> &[ScoredRace] {
        let q = self.qualifying_needed.min(self.races.len());
        &self.races[..q]
    }

    /// Points at a position in the descending points list; positions past
    /// the end read as zero, never negative.
    pub fn points_at(&self, index: usize) -> i32 {
        self.races.get(index).map_or(0, |r| r.points)
    }
}

/// Computed standing for one (registration, category), replaced wholesale on
/// every recalculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStanding {
    pub registration_id: Uuid,
    pub runner_id: Uuid,
    pub category: ScoringCategory,
    pub gender: Gender,
    pub age_group: String,
    pub qualifying_races_needed: u32,
    pub races_participated: u32,
    pub counted_race_points: Vec<i32>,
    pub total_points: i32,
    pub overall_rank: u32,
    pub gender_rank: u32,
    pub age_group_rank: u32,
    pub last_calculated_at: NaiveDateTime,
}

/// Aggregate counts of records skipped during a run. Surfaced to callers,
/// never fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunWarnings {
    pub unknown_race: u32,
    pub unknown_registration: u32,
    pub malformed: u32,
}

/// Replacement standings set for one (series, year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsSet {
    pub series_id: Uuid,
    pub year: i32,
    pub qualifying_races_needed: u32,
    pub standings: Vec<SeriesStanding>,
    pub warnings: RunWarnings,
}
