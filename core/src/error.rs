use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid slot index")]
    InvalidSlot,
    #[error("Invalid cup identity")]
    InvalidCup,
    #[error("A slot cannot be swapped with itself")]
    SameSlot,
    #[error("Shuffle count range is empty")]
    EmptyShuffleRange,
    #[error("Swap script is longer than a round allows")]
    ScriptTooLong,
}

pub type Result<T> = core::result::Result<T, GameError>;
