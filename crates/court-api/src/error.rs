use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("server task failed: {0}")]
    Server(String),
}
