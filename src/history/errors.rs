use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History provider unavailable: {0}")]
    Unavailable(String),
    #[error("History lookup for [{key}] timed out")]
    Timeout {
        key: String
    },
    #[error("History snapshot [{path}] could not be read: {source}")]
    Snapshot {
        path: String,
        #[source]
        source: csv::Error
    }
}
