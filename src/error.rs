use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please enter a valid number")]
    InvalidCount,
    #[error("Number exceeds total available records ({requested} > {total})")]
    CountExceedsTotal { requested: u64, total: u64 },

    #[error("Page numbers start at 1, got {0}")]
    InvalidPage(u32),
    #[error("Row {row} is not on the current page ({len} rows)")]
    InvalidRow { row: usize, len: usize },
    #[error("Unrecognised command: {0} (type `h` for help)")]
    InvalidCommand(String),

    #[error("Couldn't decode page {page}: {source}")]
    ParsePage {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bulk select was cancelled before it finished.")]
    BulkSelectCancelled,

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl Error {
    /// Errors caused by user input rather than by the catalog or the runtime.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidCount
                | Error::CountExceedsTotal { .. }
                | Error::InvalidRow { .. }
                | Error::InvalidCommand(_)
        )
    }
}
