use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Module not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git ls-remote failed: {stderr}")]
    GitCommand { stderr: String },

    #[error("git ls-remote timed out after {secs} seconds")]
    Timeout { secs: u64 },
}
