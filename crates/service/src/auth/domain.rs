use serde::{Deserialize, Serialize};

use crate::user::domain::User;
use crate::validation::{Rule, Validate};

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MinLen(1), Rule::MaxLen(64)];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PHONE_RULES: &[Rule] = &[Rule::Required, Rule::MaxLen(64)];
const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::MinLen(8), Rule::MaxLen(255)];

/// Registration input. Missing JSON fields decode as empty strings and fail `Required`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUser {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl Validate for CreateUser {
    fn fields(&self) -> Vec<(&'static str, Option<&str>, &'static [Rule])> {
        vec![
            ("name", Some(self.name.as_str()), NAME_RULES),
            ("lastname", Some(self.lastname.as_str()), NAME_RULES),
            ("email", Some(self.email.as_str()), EMAIL_RULES),
            ("phone", Some(self.phone.as_str()), PHONE_RULES),
            ("password", Some(self.password.as_str()), PASSWORD_RULES),
        ]
    }
}

/// Login input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl Validate for LoginInput {
    fn fields(&self) -> Vec<(&'static str, Option<&str>, &'static [Rule])> {
        const LOGIN_EMAIL: &[Rule] = &[Rule::Email];
        const LOGIN_PASSWORD: &[Rule] = &[Rule::MinLen(8), Rule::MaxLen(255)];
        vec![
            ("email", Some(self.email.as_str()), LOGIN_EMAIL),
            ("password", Some(self.password.as_str()), LOGIN_PASSWORD),
        ]
    }
}

/// Result of a successful register or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}
