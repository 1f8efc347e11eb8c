use thiserror::Error;

// contract violations on the caller's side; there is no fallback value for these
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
}

pub(crate) fn or_panic<T>(r: Result<T, SeqError>) -> T {
    r.unwrap_or_else(|e| panic!("{e}"))
}
