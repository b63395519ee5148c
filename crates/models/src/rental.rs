use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bicycle, station, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rentals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub bicycle_id: i64,
    pub station_start_id: i64,
    pub station_end_id: i64,
    pub start_time: DateTimeWithTimeZone,
    pub end_time: DateTimeWithTimeZone,
    pub total_cost: f64,
}

// Two relations point at stations, so there is no `Related<station::Entity>` impl.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, Bicycle, StationStart, StationEnd }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Bicycle => Entity::belongs_to(bicycle::Entity).from(Column::BicycleId).to(bicycle::Column::Id).into(),
            Relation::StationStart => Entity::belongs_to(station::Entity).from(Column::StationStartId).to(station::Column::Id).into(),
            Relation::StationEnd => Entity::belongs_to(station::Entity).from(Column::StationEndId).to(station::Column::Id).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}
