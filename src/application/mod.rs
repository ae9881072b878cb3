//! Application layer: use-case services orchestrating the domain
//! repositories.

pub mod services;

pub use services::{AvailabilityService, BookingService, PackService, PaymentService};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use sea_orm_migration::MigratorTrait;

    use crate::domain::RepositoryProvider;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    /// Fresh in-memory SQLite database with the full schema applied.
    /// Single connection so every query sees the same database.
    pub async fn test_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.expect("connect sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        db
    }

    pub fn test_repos(db: DatabaseConnection) -> Arc<dyn RepositoryProvider> {
        Arc::new(SeaOrmRepositoryProvider::new(db))
    }
}
