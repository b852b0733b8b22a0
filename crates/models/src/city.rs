use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, event};

/// A city; serialized as `{"id", "name"}`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Event,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Event => Entity::has_many(event::Entity).into() }
    }
}

impl Related<event::Entity> for Entity {
    fn to() -> RelationDef { Relation::Event.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// All cities ordered by name, id breaking ties.
pub async fn find_all_sorted<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Name)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id(id).count(db).await? > 0)
}

/// Insert a city; the store assigns the id.
pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, ModelError> {
    let am = ActiveModel { name: Set(name.to_string()), ..Default::default() };
    Ok(am.insert(db).await?)
}

/// Delete a city; returns true if a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
