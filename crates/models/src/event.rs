use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{city, errors::ModelError};

/// An event hosted by a city; serialized as
/// `{"id", "name", "date", "url", "cityId"}` with `date` as `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub date: Date,
    pub url: String,
    pub city_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    City,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::City => Entity::belongs_to(city::Entity)
                .from(Column::CityId)
                .to(city::Column::Id)
                .into(),
        }
    }
}

impl Related<city::Entity> for Entity {
    fn to() -> RelationDef { Relation::City.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Number of events referencing `city_id`.
pub async fn count_by_city<C: ConnectionTrait>(db: &C, city_id: i64) -> Result<u64, ModelError> {
    let n = Entity::find()
        .filter(Column::CityId.eq(city_id))
        .count(db)
        .await?;
    Ok(n)
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    date: Date,
    url: &str,
    city_id: i64,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        date: Set(date),
        url: Set(url.to_string()),
        city_id: Set(city_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every mutable column of `current`; an unknown `city_id`
/// surfaces as `ModelError::Integrity`.
pub async fn replace<C: ConnectionTrait>(
    db: &C,
    current: Model,
    name: &str,
    date: Date,
    url: &str,
    city_id: i64,
) -> Result<Model, ModelError> {
    let mut am: ActiveModel = current.into();
    am.name = Set(name.to_string());
    am.date = Set(date);
    am.url = Set(url.to_string());
    am.city_id = Set(city_id);
    Ok(am.update(db).await?)
}
