use thiserror::Error as ThisError;

/// Fatal outcomes of building or reading an instance. None of these are
/// retried; the caller decides whether the batch stops.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum GenError {
    #[error("could not place line {line} after {attempts} attempts")]
    PlacementExhausted { line: usize, attempts: usize },
    #[error("not enough free cells for {what}: need {needed}, have {available}")]
    InsufficientCapacity {
        what: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("could not construct an unsolvable endpoint pair after {attempts} attempts")]
    UnsatConstructionExhausted { attempts: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, GenError>;

impl GenError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
