//! Championship series standings computation.
//!
//! Pure, single-threaded batch engine: given a season snapshot (registrations,
//! races, results) it produces one ranked standings set per scoring category.
//! All I/O lives in the `storage` crate; this crate never touches a database.

pub mod eligibility;
pub mod engine;
pub mod error;
pub mod model;
pub mod points;
pub mod rank;
pub mod selector;
pub mod tiebreak;

pub use engine::compute_standings;
pub use error::{EngineError, Result};
pub use model::{
    Gender, RaceRecord, RegistrationRecord, ResultRecord, RunWarnings, ScoringCategory,
    SeasonSnapshot, SeriesStanding, StandingsSet,
};
