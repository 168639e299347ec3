use thiserror::Error;

#[derive(Debug, Error)]
pub enum BranchpickError {
    #[error("git not found; install it and make sure it is on PATH")]
    GitMissing,
    #[error("git command failed: {command}\n{stderr}")]
    GitCommand { command: String, stderr: String },
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),
    #[error("choice {index} out of range; {count} branches listed")]
    ChoiceOutOfRange { index: usize, count: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BranchpickError>;
