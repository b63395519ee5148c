use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{Rule, Validate};

const LOCATION_RULES: &[Rule] = &[Rule::Required, Rule::MinLen(8), Rule::MaxLen(100)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub location_street: String,
    pub bikes_available: i32,
    pub bikes_total: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<models::station::Model> for Station {
    fn from(m: models::station::Model) -> Self {
        Self {
            id: m.id,
            location_street: m.location_street,
            bikes_available: m.bikes_available,
            bikes_total: m.bikes_total,
            created_at: m.created_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}

/// Body of station create and location update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationLocation {
    pub location_street: String,
}

impl Validate for StationLocation {
    fn fields(&self) -> Vec<(&'static str, Option<&str>, &'static [Rule])> {
        vec![("location_street", Some(self.location_street.as_str()), LOCATION_RULES)]
    }
}

/// Relative change applied to a bike counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BikeDelta {
    pub delta: i32,
}
