//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20210518_000001_create_city;
mod m20210518_000002_create_event;
mod m20210518_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210518_000001_create_city::Migration),
            Box::new(m20210518_000002_create_event::Migration),
            // Indexes should always be applied last
            Box::new(m20210518_000003_add_indexes::Migration),
        ]
    }
}
