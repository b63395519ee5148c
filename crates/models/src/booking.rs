use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{bicycle, payment, station, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub bicycle_id: i64,
    pub station_id: i64,
    pub payment_id: i64,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub expires_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, Bicycle, Station, Payment }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Bicycle => Entity::belongs_to(bicycle::Entity).from(Column::BicycleId).to(bicycle::Column::Id).into(),
            Relation::Station => Entity::belongs_to(station::Entity).from(Column::StationId).to(station::Column::Id).into(),
            Relation::Payment => Entity::belongs_to(payment::Entity).from(Column::PaymentId).to(payment::Column::Id).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<payment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Payment.def() }
}

impl ActiveModelBehavior for ActiveModel {}
