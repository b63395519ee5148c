pub mod seaorm;

pub use seaorm::SeaOrmStationRepository;
