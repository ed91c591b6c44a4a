//! Schema migrations for the cinema tables.
//!
//! ```no_run
//! use cinema_seaorm_store::migration::{Migrator, MigratorTrait};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let conn = Database::connect("sqlite::memory:").await?;
//! Migrator::up(&conn, None).await?;
//! # Ok(())
//! # }
//! ```

pub use sea_orm_migration::prelude::*;

mod m20241019_000001_create_cinema_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Own history table so the schema can share a database with other migrators
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("cinema_seaorm_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241019_000001_create_cinema_tables::Migration)]
    }
}
