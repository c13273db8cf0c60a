mod async_engine;
mod record;

pub use async_engine::{write_assessments, AssessedTransaction, AsyncEngine};
pub use record::{AssessmentRecord, TransactionRecord};
