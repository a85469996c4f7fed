use thiserror::Error;

use crate::types::Category;

/// Every way the engine can refuse a request. A rejected request leaves the game untouched.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error("category {category} has already been scored")]
    AlreadyScored { category: Category },
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] OperationError),
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("at least {min} players are required, got {got}")]
    TooFewPlayers { min: usize, got: usize },
    #[error("player name {0:?} appears more than once")]
    DuplicateName(String),
    #[error("player names must not be empty")]
    EmptyName,
    #[error("rolls per turn must be at least 1, got {0}")]
    InvalidRollLimit(u8),
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum OperationError {
    #[error("the dice have not been rolled this turn")]
    NotRolledYet,
    #[error("die index {index} is out of range")]
    DieIndexOutOfRange { index: usize },
    #[error("all {limit} rolls for this turn have been used")]
    RollLimitReached { limit: u8 },
    #[error("it is not {name}'s turn")]
    NotCurrentPlayer { name: String },
    #[error("no player named {name:?}")]
    UnknownPlayer { name: String },
    #[error("a score has already been entered this turn")]
    TurnAlreadyScored,
    #[error("the game is over")]
    GameOver,
}

/// Errors from building a dice set out of explicit faces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum DiceError {
    #[error("expected {expected} dice, got {got}")]
    WrongDiceCount { expected: usize, got: usize },
    #[error("face {got} is outside 1..={max}")]
    FaceOutOfRange { max: u8, got: u8 },
    #[error("a face script needs at least one face")]
    EmptyScript,
}
