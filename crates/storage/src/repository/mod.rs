pub mod season;
pub mod standings;

pub use self::season::SeasonRepository;
pub use self::standings::StandingsRepository;
