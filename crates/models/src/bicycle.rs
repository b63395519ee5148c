use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::station;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bicycles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub station_id: i64,
    pub status: String,
    pub last_service: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Station,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Station => Entity::belongs_to(station::Entity).from(Column::StationId).to(station::Column::Id).into() }
    }
}

impl Related<station::Entity> for Entity {
    fn to() -> RelationDef { Relation::Station.def() }
}

impl ActiveModelBehavior for ActiveModel {}
