use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status: expected {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("{failed} of {total} creates failed")]
    Partial { failed: usize, total: usize },
    #[error("output error: {0}")]
    Output(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
}
