pub mod race;
pub mod race_result;
pub mod series_registration;
pub mod series_standing;

pub use race::Race;
pub use race_result::RaceResult;
pub use series_registration::SeriesRegistration;
pub use series_standing::SeriesStandingRow;
