//! Store - the single choke point for entity-kind-tagged database access
//!
//! Wraps the shared connection, runs transactions, and is the only place
//! raw `DbErr` values are translated into the `StorageError` taxonomy.
//! The entity kind is an explicit parameter on every classification call,
//! so a `Store` value can be shared freely across concurrent operations.

use crate::contract::StorageError;
use futures::future::BoxFuture;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PrimaryKeyTrait, QuerySelect, Select, TransactionTrait,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

use super::entity;

/// Which domain entity an operation concerns. Selects the not-found variant
/// used when classification hits a missing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Tree,
    TreeCluster,
    Sensor,
    Image,
    Vehicle,
    Flowerbed,
    Region,
}

impl EntityKind {
    /// The not-found error for this kind. Image, sensor, flowerbed and tree
    /// cluster have dedicated variants; everything else falls back to the
    /// generic one.
    pub fn not_found(self) -> StorageError {
        match self {
            Self::Image => StorageError::ImageNotFound,
            Self::Sensor => StorageError::SensorNotFound,
            Self::Flowerbed => StorageError::FlowerbedNotFound,
            Self::TreeCluster => StorageError::TreeClusterNotFound,
            Self::Tree | Self::Vehicle | Self::Region => StorageError::EntityNotFound,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tree => "tree",
            Self::TreeCluster => "treecluster",
            Self::Sensor => "sensor",
            Self::Image => "image",
            Self::Vehicle => "vehicle",
            Self::Flowerbed => "flowerbed",
            Self::Region => "region",
        };
        f.write_str(name)
    }
}

/// Cheap handle over the shared connection pool; clone one per logical
/// operation.
#[derive(Clone)]
pub struct Store {
    db: Arc<DatabaseConnection>,
}

impl Store {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Translates a raw executor error into the storage taxonomy, attributed
    /// to `kind`. Logging here is a side effect, not part of the contract.
    pub fn classify(&self, kind: EntityKind, err: DbErr) -> StorageError {
        error!(entity_kind = %kind, error = %err, "database operation failed");
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
                error!(entity_kind = %kind, "entity not found");
                kind.not_found()
            }
            other => Self::classify_db(other),
        }
    }

    /// Classification for errors that carry no entity attribution.
    fn classify_db(err: DbErr) -> StorageError {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                error!(error = %err, "connection is closed");
                StorageError::ConnectionClosed
            }
            other => {
                error!(error = %other, "unknown storage error");
                StorageError::Unknown(other)
            }
        }
    }

    /// Runs `op` inside a transaction. Commit failures surface as
    /// `TxCommitFailed`; if `op` fails the transaction is rolled back and the
    /// original error returned, and a failed rollback yields a composite
    /// error preserving both causes. Transactions do not nest.
    pub async fn with_transaction<T, F>(&self, op: F) -> Result<T, StorageError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<T, StorageError>>
            + Send,
    {
        let txn = self.db.begin().await.map_err(Self::classify_db)?;

        match op(&txn).await {
            Ok(value) => match txn.commit().await {
                Ok(()) => Ok(value),
                Err(err) => {
                    error!(error = %err, "transaction commit failed");
                    Err(StorageError::TxCommitFailed(err))
                }
            },
            Err(err) => match txn.rollback().await {
                Ok(()) => Err(err),
                Err(rollback) => {
                    error!(error = %rollback, "transaction rollback failed");
                    Err(StorageError::TxRollback {
                        source: Box::new(err),
                        rollback,
                    })
                }
            },
        }
    }

    /// Singular fetch preserving the two distinguished executor signals:
    /// zero rows becomes the kind's not-found error, more than one row
    /// becomes `TooManyRows`.
    pub(crate) async fn find_one<E, C>(
        &self,
        conn: &C,
        kind: EntityKind,
        select: Select<E>,
    ) -> Result<E::Model, StorageError>
    where
        E: EntityTrait,
        C: ConnectionTrait,
    {
        let rows = select
            .limit(2)
            .all(conn)
            .await
            .map_err(|err| self.classify(kind, err))?;

        let mut rows = rows.into_iter();
        match (rows.next(), rows.next()) {
            (Some(row), None) => Ok(row),
            (None, _) => {
                debug!(entity_kind = %kind, "no matching row");
                Err(kind.not_found())
            }
            (Some(_), Some(_)) => {
                error!(entity_kind = %kind, "received more rows than expected");
                Err(StorageError::TooManyRows)
            }
        }
    }

    /// Shared existence-validation primitive used before accepting a foreign
    /// reference. A `None` id means "nothing to check" and succeeds without
    /// touching the database.
    pub(crate) async fn check_exists<E>(
        &self,
        kind: EntityKind,
        id: Option<i32>,
    ) -> Result<(), StorageError>
    where
        E: EntityTrait,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let Some(id) = id else {
            return Ok(());
        };

        let found = E::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(|err| self.classify(kind, err))?;

        match found {
            Some(_) => Ok(()),
            None => {
                debug!(entity_kind = %kind, id, "referenced entity does not exist");
                Err(kind.not_found())
            }
        }
    }

    pub async fn check_sensor_exists(&self, id: Option<i32>) -> Result<(), StorageError> {
        self.check_exists::<entity::sensor::Entity>(EntityKind::Sensor, id)
            .await
    }

    pub async fn check_image_exists(&self, id: Option<i32>) -> Result<(), StorageError> {
        self.check_exists::<entity::image::Entity>(EntityKind::Image, id)
            .await
    }

    pub async fn check_region_exists(&self, id: Option<i32>) -> Result<(), StorageError> {
        self.check_exists::<entity::region::Entity>(EntityKind::Region, id)
            .await
    }

    pub async fn check_tree_cluster_exists(&self, id: Option<i32>) -> Result<(), StorageError> {
        self.check_exists::<entity::tree_cluster::Entity>(EntityKind::TreeCluster, id)
            .await
    }
}
