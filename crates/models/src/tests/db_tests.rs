use crate::{city, db, event, seed};
use super::setup_test_db;
use sea_orm::{ConnectionTrait, Statement};
use anyhow::Result;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = setup_test_db().await?;

    let backend = db.get_database_backend();
    let stmt = Statement::from_string(backend, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// Re-running migrations on an up-to-date schema is a no-op
#[tokio::test]
async fn test_migrations_are_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    db::migrate(&db).await?;
    assert!(city::find_all_sorted(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_seed_inserts_fixture_once() -> Result<()> {
    let db = setup_test_db().await?;

    let data = seed::sample_data(&db).await?.expect("first seed inserts rows");
    assert_eq!(data.cities.len(), seed::CITIES.len());
    assert_eq!(data.events.len(), seed::EVENTS.len());

    // fresh store: ids follow insertion order
    let ids: Vec<i64> = data.cities.iter().map(|c| c.id).collect();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    assert_eq!(data.city("Manaus").map(|c| c.id), Some(5));
    assert_eq!(data.city("Belo Horizonte").map(|c| c.id), Some(7));

    let sao_paulo = data.city("São Paulo").unwrap();
    assert_eq!(event::count_by_city(&db, sao_paulo.id).await?, 2);

    assert!(seed::sample_data(&db).await?.is_none());
    assert_eq!(city::find_all_sorted(&db).await?.len(), seed::CITIES.len());
    Ok(())
}

#[tokio::test]
async fn test_prepare_migrates_and_seeds_from_config() -> Result<()> {
    let mut cfg = configs::DatabaseConfig {
        url: db::IN_MEMORY_URL.to_string(),
        seed_sample_data: true,
        ..configs::DatabaseConfig::default()
    };
    cfg.normalize_from_env();

    let db = db::prepare(&cfg).await?;
    let names: Vec<String> = city::find_all_sorted(&db).await?.into_iter().map(|c| c.name).collect();
    assert_eq!(&names[..3], ["Belo Horizonte", "Belém", "Brasília"]);
    Ok(())
}
