//! Signed, time-bound access tokens (HMAC JWT).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use super::errors::AuthError;
use crate::user::domain::User;

/// Payload carried by every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    pub exp: i64,
}

/// Issues and verifies tokens with one shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration { self.ttl }

    pub fn issue(&self, user: &User) -> Result<String, AuthError> { self.issue_at(user, Utc::now()) }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            user_id: user.id,
            email: user.email.clone().unwrap_or_default(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|e| AuthError::Internal(format!("signing: {e}")))
    }

    /// Check signature, algorithm family and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // `exp` is a hard deadline
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User { id: 42, email: Some("rider@example.com".into()), ..Default::default() }
    }

    #[test]
    fn issued_token_round_trips_identity() {
        let issuer = TokenIssuer::new("secret", Duration::hours(24));
        let token = issuer.issue(&user()).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "rider@example.com");
        let ttl = claims.exp - Utc::now().timestamp();
        assert!(ttl > 23 * 3600 && ttl <= 24 * 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new("secret", Duration::hours(24));
        let token = issuer.issue_at(&user(), Utc::now() - Duration::hours(25)).unwrap();
        assert!(matches!(issuer.verify(&token), Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn token_is_expired_right_after_its_deadline() {
        let issuer = TokenIssuer::new("secret", Duration::hours(24));
        let token = issuer.issue_at(&user(), Utc::now() - Duration::hours(24) - Duration::seconds(5)).unwrap();
        assert!(matches!(issuer.verify(&token), Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let issuer = TokenIssuer::new("secret", Duration::hours(24));
        let other = TokenIssuer::new("other-secret", Duration::hours(24));
        let token = other.issue(&user()).unwrap();
        assert!(matches!(issuer.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn non_hmac_algorithm_is_rejected() {
        let issuer = TokenIssuer::new("secret", Duration::hours(24));
        let token = issuer.issue(&user()).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        // {"alg":"RS256","typ":"JWT"}
        parts[0] = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9";
        let forged = parts.join(".");
        assert!(matches!(issuer.verify(&forged), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn garbage_is_rejected() {
        let issuer = TokenIssuer::new("secret", Duration::hours(24));
        assert!(matches!(issuer.verify("not.a.jwt"), Err(AuthError::InvalidToken)));
        assert!(matches!(issuer.verify(""), Err(AuthError::InvalidToken)));
    }
}
