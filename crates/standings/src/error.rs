use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no races held for series {series_id} year {year}")]
    NoRacesHeld { series_id: Uuid, year: i32 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
