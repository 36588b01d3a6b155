use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Pattern is empty")]
    EmptyPattern,

    #[error("Buffer of {buffer_len} bytes cannot hold {count} copies")]
    BufferTooSmall { buffer_len: usize, count: u32 },

    #[error("Outer unit count {0} has no divisor greater than 1")]
    NoCandidates(u32),

    #[error("No copy count found after testing {tested} candidates")]
    Unresolved { tested: usize },

    #[error("Cannot split {num_bytes} bytes into {num_pages} whole pages")]
    PageMismatch { num_bytes: usize, num_pages: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
