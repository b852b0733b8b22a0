use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Event: index on city_id, backs the dependent-events count on city delete
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_city_id")
                    .table(Event::Table)
                    .col(Event::CityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_event_city_id").table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Event { Table, CityId }
