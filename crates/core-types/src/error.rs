use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown trade command code: {0}")]
    UnknownCommand(i32),
}
