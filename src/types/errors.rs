use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("Score error: value {0} is not a finite number")]
    NotFinite(f64)
}
