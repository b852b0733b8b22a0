#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::seed::{self, SampleData};

/// Fresh migrated in-memory database, private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

/// Same as `get_db`, with the sample cities and events inserted.
pub async fn get_seeded_db() -> Result<(DatabaseConnection, SampleData), anyhow::Error> {
    let db = get_db().await?;
    let data = seed::sample_data(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("fresh database already had cities"))?;
    Ok((db, data))
}
