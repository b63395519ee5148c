use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{Rule, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Deleted,
    Banned,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Deleted => "deleted",
            UserStatus::Banned => "banned",
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "deleted" => Ok(UserStatus::Deleted),
            "banned" => Ok(UserStatus::Banned),
            other => Err(format!("unknown user status: {other}")),
        }
    }
}

/// Domain user. `None` means the field was never set or has been anonymized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<UserStatus>,
    /// Argon2 PHC hash; never serialized.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            lastname: m.lastname,
            email: m.email,
            phone: m.phone,
            status: m.status.as_deref().and_then(|s| s.parse().ok()),
            password: m.password,
            created_at: m.created_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}

/// A user ready to be persisted; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub status: UserStatus,
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: Option<String>,
    pub status: Option<UserStatus>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.lastname.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.password_hash.is_none()
            && self.status.is_none()
    }
}

/// Profile edit request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Validate for UpdateUser {
    fn fields(&self) -> Vec<(&'static str, Option<&str>, &'static [Rule])> {
        const NAME: &[Rule] = &[Rule::MinLen(1), Rule::MaxLen(64)];
        const EMAIL: &[Rule] = &[Rule::Email];
        const PHONE: &[Rule] = &[Rule::MinLen(1), Rule::MaxLen(64)];
        vec![
            ("name", self.name.as_deref(), NAME),
            ("lastname", self.lastname.as_deref(), NAME),
            ("email", self.email.as_deref(), EMAIL),
            ("phone", self.phone.as_deref(), PHONE),
        ]
    }
}

impl From<UpdateUser> for UserUpdate {
    fn from(u: UpdateUser) -> Self {
        Self { name: u.name, lastname: u.lastname, email: u.email, phone: u.phone, ..Default::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: i64,
    pub bicycle_id: i64,
    pub station_id: i64,
    pub payment_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<models::booking::Model> for Booking {
    fn from(m: models::booking::Model) -> Self {
        Self {
            id: m.id,
            bicycle_id: m.bicycle_id,
            station_id: m.station_id,
            payment_id: m.payment_id,
            created_at: m.created_at.map(|t| t.with_timezone(&Utc)),
            expires_at: m.expires_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rental {
    pub id: i64,
    pub bicycle_id: i64,
    pub station_start_id: i64,
    pub station_end_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_cost: f64,
}

impl From<models::rental::Model> for Rental {
    fn from(m: models::rental::Model) -> Self {
        Self {
            id: m.id,
            bicycle_id: m.bicycle_id,
            station_start_id: m.station_start_id,
            station_end_id: m.station_end_id,
            start_time: m.start_time.with_timezone(&Utc),
            end_time: m.end_time.with_timezone(&Utc),
            total_cost: m.total_cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: i64,
    pub method: String,
    pub amount: f64,
    pub transaction_id: Option<String>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<models::payment::Model> for Payment {
    fn from(m: models::payment::Model) -> Self {
        Self {
            id: m.id,
            method: m.method,
            amount: m.amount,
            transaction_id: m.transaction_id,
            status: m.status,
            created_at: m.created_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}

/// A user together with its most recent activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub user: User,
    pub bookings: Vec<Booking>,
    pub rentals: Vec<Rental>,
    pub payments: Vec<Payment>,
}
