//! Create `city` table.
//!
//! Root entity; `event` rows reference it.
use sea_orm_migration::{prelude::*, schema::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut name = string_len(City::Name, 255);
        // Bytewise ordering on Postgres, matching SQLite's default BINARY collation
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            name.extra("COLLATE \"C\"");
        }

        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(big_integer(City::Id).auto_increment().primary_key().take())
                    .col(name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(City::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum City { Table, Id, Name }
