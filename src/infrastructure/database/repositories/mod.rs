//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod booking_repository;
pub mod pack_repository;
pub mod payment_repository;
pub mod repository_provider;
pub mod rule_repository;
pub mod slot_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::shared::errors::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

pub(crate) fn txn_err(e: sea_orm::TransactionError<DomainError>) -> DomainError {
    match e {
        sea_orm::TransactionError::Connection(e) => db_err(e),
        sea_orm::TransactionError::Transaction(e) => e,
    }
}
