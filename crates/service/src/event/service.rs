use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::event;

use crate::errors::ServiceError;
use crate::event::domain::EventInput;

#[derive(Clone)]
pub struct EventService {
    db: DatabaseConnection,
}

impl EventService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Full replace of name, date, url and host city of event `id`.
    ///
    /// A `cityId` the store does not know is reported as `NotFound`.
    #[instrument(skip(self, input), fields(city_id = input.city_id))]
    pub async fn update(&self, id: i64, input: EventInput) -> Result<event::Model, ServiceError> {
        let updated = self
            .db
            .transaction::<_, event::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    let current = event::find_by_id(txn, id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("event"))?;
                    event::replace(txn, current, &input.name, input.date, &input.url, input.city_id)
                        .await
                        .map_err(|e| {
                            if e.is_integrity() {
                                ServiceError::NotFound(format!("city {} not found", input.city_id))
                            } else {
                                e.into()
                            }
                        })
                })
            })
            .await?;
        info!(id = updated.id, "updated event");
        Ok(updated)
    }
}
