use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestrunError {
    #[error("no test framework detected (checked: {})", .checked.join(", "))]
    NoFrameworkDetected { checked: Vec<String> },

    #[error("'{binary}' not found on PATH")]
    ToolNotAvailable { binary: String },

    #[error("failed to spawn '{program}': {message}")]
    SpawnFailed { program: String, message: String },
}

pub type Result<T> = std::result::Result<T, TestrunError>;
