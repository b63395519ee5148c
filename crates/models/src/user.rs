use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{admin, booking, rental};

/// Profile columns are nullable so an account can be anonymized in place.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub lastname: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
    #[sea_orm(unique)]
    pub phone: Option<String>,
    pub status: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Admin,
    Bookings,
    Rentals,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Admin => Entity::has_one(admin::Entity).into(),
            Relation::Bookings => Entity::has_many(booking::Entity).into(),
            Relation::Rentals => Entity::has_many(rental::Entity).into(),
        }
    }
}

impl Related<admin::Entity> for Entity {
    fn to() -> RelationDef { Relation::Admin.def() }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Bookings.def() }
}

impl Related<rental::Entity> for Entity {
    fn to() -> RelationDef { Relation::Rentals.def() }
}

impl ActiveModelBehavior for ActiveModel {}
