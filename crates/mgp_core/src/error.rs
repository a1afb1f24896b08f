use thiserror::Error;

/// Precondition violations raised by the race simulator.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("at least 2 riders are required for a race, found {0}")]
    NotEnoughRiders(usize),

    #[error("skill and bike weights must sum to a value in [0.9, 1.1], got {0}")]
    InvalidWeights(f64),
}

/// Domain validation and state-machine errors raised by the career layer.
///
/// These are caller bugs per the error taxonomy: they are reported once and
/// never retried internally. Transfer rejections and retirements are normal
/// outcomes and do not appear here.
#[derive(Debug, Error, PartialEq)]
pub enum CareerError {
    #[error("a season is already in progress")]
    SeasonAlreadyActive,

    #[error("no season in progress")]
    NoActiveSeason,

    #[error("the season has already finished")]
    SeasonFinished,

    #[error("difficulty must be in 1..=100, got {0}")]
    InvalidDifficulty(u8),

    #[error("the season needs at least 1 race, got {0}")]
    InvalidRaceCount(u32),

    #[error("team {team} already has a full roster")]
    TeamFull { team: String },

    #[error("name must not be empty")]
    EmptyName,

    #[error("riders must be at least 18 years old, got {0}")]
    UnderAge(u32),

    #[error("{attribute} must be in 1..=100, got {value}")]
    AttributeOutOfRange { attribute: &'static str, value: i64 },

    #[error(transparent)]
    Sim(#[from] SimError),
}
