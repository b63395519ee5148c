//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_admins;
mod m20240101_000003_create_stations;
mod m20240101_000004_create_bicycles;
mod m20240101_000005_create_payments;
mod m20240101_000006_create_bookings;
mod m20240101_000007_create_rentals;
mod m20240101_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_admins::Migration),
            Box::new(m20240101_000003_create_stations::Migration),
            Box::new(m20240101_000004_create_bicycles::Migration),
            Box::new(m20240101_000005_create_payments::Migration),
            Box::new(m20240101_000006_create_bookings::Migration),
            Box::new(m20240101_000007_create_rentals::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000008_add_indexes::Migration),
        ]
    }
}
