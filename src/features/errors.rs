use crate::history::HistoryError;
use crate::models::Transaction;
use crate::types::TransactionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureExtractionError {
    #[error("Transaction [{transaction_id}] has no user id")]
    MissingUser {
        transaction_id: TransactionId
    },
    #[error("Transaction [{transaction_id}] has a negative amount")]
    NegativeAmount {
        transaction_id: TransactionId
    },
    #[error("History lookup failed for transaction [{transaction_id}]: {source}")]
    History {
        transaction_id: TransactionId,
        #[source]
        source: HistoryError
    }
}

impl FeatureExtractionError {
    pub fn missing_user(tx: &Transaction) -> Self {
        Self::MissingUser { transaction_id: tx.transaction_id.clone() }
    }

    pub fn negative_amount(tx: &Transaction) -> Self {
        Self::NegativeAmount { transaction_id: tx.transaction_id.clone() }
    }

    pub fn history(tx: &Transaction, source: HistoryError) -> Self {
        Self::History {
            transaction_id: tx.transaction_id.clone(),
            source
        }
    }
}
