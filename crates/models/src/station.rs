use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bicycle;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub location_street: String,
    pub bikes_available: i32,
    pub bikes_total: i32,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Bicycles,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Bicycles => Entity::has_many(bicycle::Entity).into() }
    }
}

impl Related<bicycle::Entity> for Entity {
    fn to() -> RelationDef { Relation::Bicycles.def() }
}

impl ActiveModelBehavior for ActiveModel {}
