//! Persistence contract for the standings engine: load the season snapshot
//! for a (series, year), run the computation, replace the standings set.
//! Everything else (ingestion, REST, UI) lives with external collaborators.

pub mod error;
pub mod models;
pub mod repository;
pub mod services;
