use sea_orm::DatabaseConnection;

/// Connection, migration and seeding tests
pub mod db_tests;



/// Fresh migrated in-memory database per test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_in_memory().await
}
