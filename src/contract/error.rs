//! Storage error taxonomy
//!
//! The single vocabulary every repository speaks. Raw `DbErr` values are
//! translated exactly once, inside `Store::classify`; repositories and the
//! service layer above only ever see these kinds.

use sea_orm::DbErr;

/// Typed storage failure surfaced to the service layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("image not found")]
    ImageNotFound,

    #[error("sensor not found")]
    SensorNotFound,

    #[error("flowerbed not found")]
    FlowerbedNotFound,

    #[error("tree cluster not found")]
    TreeClusterNotFound,

    /// Fallback for entity kinds without a dedicated not-found variant.
    #[error("entity not found")]
    EntityNotFound,

    /// A singular lookup matched more than one row, e.g. a by-name query
    /// over duplicated names.
    #[error("received more rows than expected")]
    TooManyRows,

    /// Kept so callers can match the full kind set; transaction handles are
    /// consumed by commit/rollback, so this crate never produces it itself.
    #[error("transaction is closed")]
    TxClosed,

    #[error("transaction commit failed")]
    TxCommitFailed(#[source] DbErr),

    /// The transaction body failed and the rollback failed too. Both causes
    /// are preserved; `source` is the original failure.
    #[error("transaction rollback failed after {source}")]
    TxRollback {
        source: Box<StorageError>,
        rollback: DbErr,
    },

    #[error("connection is closed")]
    ConnectionClosed,

    #[error("failed to decode sensor payload")]
    PayloadDecode(#[source] serde_json::Error),

    #[error("unknown storage error")]
    Unknown(#[source] DbErr),
}

impl StorageError {
    /// True for every not-found kind, including the generic fallback.
    /// The HTTP boundary maps these to a 404 and everything else to a 500.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ImageNotFound
                | Self::SensorNotFound
                | Self::FlowerbedNotFound
                | Self::TreeClusterNotFound
                | Self::EntityNotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn failed_rollback_preserves_both_causes() {
        let err = StorageError::TxRollback {
            source: Box::new(StorageError::EntityNotFound),
            rollback: DbErr::Custom("rollback failed".to_string()),
        };

        match &err {
            StorageError::TxRollback { source, rollback } => {
                assert!(matches!(**source, StorageError::EntityNotFound));
                assert!(matches!(rollback, DbErr::Custom(_)));
            }
            other => panic!("unexpected variant: {other}"),
        }

        // The original failure is the error chain's source and shows up in
        // the rendered message.
        assert_eq!(
            err.to_string(),
            "transaction rollback failed after entity not found"
        );
        let source = err.source().expect("source preserved");
        assert_eq!(source.to_string(), "entity not found");
        assert!(!err.is_not_found());
    }

    #[test]
    fn commit_failure_exposes_the_database_cause() {
        let err = StorageError::TxCommitFailed(DbErr::Custom("disk full".to_string()));

        let source = err.source().expect("source preserved");
        assert!(source.to_string().contains("disk full"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn transaction_variants_are_not_missing_rows() {
        assert!(!StorageError::TxClosed.is_not_found());
        assert!(!StorageError::TxCommitFailed(DbErr::RecordNotUpdated).is_not_found());
    }
}
