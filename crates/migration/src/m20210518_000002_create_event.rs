//! Create `event` table with FK to `city`.
//!
//! Deleting a city that still has events is refused by the store (RESTRICT).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(big_integer(Event::Id).auto_increment().primary_key().take())
                    .col(string_len(Event::Name, 255))
                    .col(date(Event::Date))
                    .col(string_len(Event::Url, 512))
                    .col(big_integer(Event::CityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_city")
                            .from(Event::Table, Event::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Event::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Event { Table, Id, Name, Date, Url, CityId }

#[derive(DeriveIden)]
enum City { Table, Id }
