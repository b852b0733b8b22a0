use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{info, instrument, warn};

use models::{city, event};

use crate::city::domain::CityInput;
use crate::errors::ServiceError;

/// City use cases: listing, creation and guarded deletion.
#[derive(Clone)]
pub struct CityService {
    db: DatabaseConnection,
}

impl CityService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// All cities sorted by name; read-only, no transaction.
    pub async fn find_all(&self) -> Result<Vec<city::Model>, ServiceError> {
        Ok(city::find_all_sorted(&self.db).await?)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn insert(&self, input: CityInput) -> Result<city::Model, ServiceError> {
        let CityInput { name } = input;
        let created = self
            .db
            .transaction::<_, city::Model, ServiceError>(move |txn| {
                Box::pin(async move { Ok(city::create(txn, &name).await?) })
            })
            .await?;
        info!(id = created.id, "created city");
        Ok(created)
    }

    /// Delete a city that hosts no events.
    ///
    /// The dependency check runs before the delete, so a refused request
    /// never mutates storage. A foreign-key rejection from the store (an
    /// event inserted concurrently) surfaces as `Integrity`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.db
            .transaction::<_, (), ServiceError>(move |txn| {
                Box::pin(async move {
                    if !city::exists(txn, id).await? {
                        return Err(ServiceError::not_found("city"));
                    }
                    let dependents = event::count_by_city(txn, id).await?;
                    if dependents > 0 {
                        warn!(id, dependents, "refusing to delete city with events");
                        return Err(ServiceError::BadRequest("the city has one or more event(s)".into()));
                    }
                    remove(txn, id).await
                })
            })
            .await?;
        info!(id, "deleted city");
        Ok(())
    }
}

/// Final delete step; the store's foreign-key backstop maps to `Integrity`.
async fn remove<C: ConnectionTrait>(db: &C, id: i64) -> Result<(), ServiceError> {
    match city::delete(db, id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ServiceError::not_found("city")),
        Err(e) if e.is_integrity() => Err(ServiceError::Integrity("referential integrity failure".into())),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, get_seeded_db};

    #[tokio::test]
    async fn find_all_is_sorted_by_name() -> Result<(), anyhow::Error> {
        let (db, _) = get_seeded_db().await?;
        let svc = CityService::new(db);

        let names: Vec<String> = svc.find_all().await?.into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["Belo Horizonte", "Belém", "Brasília", "Curitiba", "Fortaleza", "Manaus", "Salvador", "São Paulo"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() -> Result<(), anyhow::Error> {
        let svc = CityService::new(get_db().await?);
        assert!(svc.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn insert_assigns_id_and_is_listed() -> Result<(), anyhow::Error> {
        let (db, _) = get_seeded_db().await?;
        let svc = CityService::new(db);

        let created = svc.insert(CityInput { name: "Recife".into() }).await?;
        assert!(created.id > 0);
        assert_eq!(created.name, "Recife");
        assert!(svc.find_all().await?.iter().any(|c| c == &created));
        Ok(())
    }

    #[tokio::test]
    async fn delete_independent_city() -> Result<(), anyhow::Error> {
        let (db, data) = get_seeded_db().await?;
        let svc = CityService::new(db.clone());
        let manaus = data.city("Manaus").unwrap().id;

        svc.delete(manaus).await?;
        assert!(!city::exists(&db, manaus).await?);
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_city_is_not_found() -> Result<(), anyhow::Error> {
        let (db, _) = get_seeded_db().await?;
        let svc = CityService::new(db);

        let err = svc.delete(50).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "unexpected error: {err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn delete_dependent_city_is_bad_request_and_keeps_row() -> Result<(), anyhow::Error> {
        let (db, data) = get_seeded_db().await?;
        let svc = CityService::new(db.clone());
        let sao_paulo = data.city("São Paulo").unwrap().id;

        let err = svc.delete(sao_paulo).await.unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)), "unexpected error: {err:?}");
        assert!(city::exists(&db, sao_paulo).await?);
        assert_eq!(event::count_by_city(&db, sao_paulo).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn store_foreign_key_rejection_is_integrity() -> Result<(), anyhow::Error> {
        let (db, data) = get_seeded_db().await?;
        let brasilia = data.city("Brasília").unwrap().id;

        // skip the dependency check and let the store refuse the delete
        let err = remove(&db, brasilia).await.unwrap_err();
        assert!(matches!(err, ServiceError::Integrity(_)), "unexpected error: {err:?}");
        assert!(city::exists(&db, brasilia).await?);
        Ok(())
    }
}
