use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model artifact [{path}] was not found")]
    ArtifactMissing {
        path: String
    },
    #[error("Model artifact [{path}] could not be read: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error
    },
    #[error("Model artifact [{path}] is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error
    },
    #[error("Model loader task failed: {0}")]
    LoaderTask(String)
}
