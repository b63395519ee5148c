use std::sync::Arc;

use models::errors::ModelError;
use tracing::{debug, info, instrument, warn};

use super::domain::{AuthSession, CreateUser, LoginInput};
use super::errors::AuthError;
use super::password::{hash_password, verify_password};
use super::token::{Claims, TokenIssuer};
use crate::user::domain::{NewUser, UserStatus};
use crate::user::repository::UserRepository;
use crate::validation::Validator;

/// Auth business service independent of web framework
pub struct AuthService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
    validator: Validator,
    tokens: TokenIssuer,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, validator: Validator, tokens: TokenIssuer) -> Self {
        Self { repo, validator, tokens }
    }

    /// Register a new user and issue a token for it.
    ///
    /// If signing fails after the insert, the account stays and the caller can log in later.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, TokenIssuer};
    /// use service::auth::domain::CreateUser;
    /// use service::user::repository::memory::InMemoryUserRepository;
    /// use service::validation::Validator;
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryUserRepository::new());
    /// let svc = AuthService::new(repo, Validator::new(), TokenIssuer::new("secret", chrono::Duration::hours(24)));
    /// let input = CreateUser {
    ///     name: "Ann".into(),
    ///     lastname: "Lee".into(),
    ///     email: "ann@example.com".into(),
    ///     phone: "+100200300".into(),
    ///     password: "Secret123".into(),
    /// };
    /// let session = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(session.user.email.as_deref(), Some("ann@example.com"));
    /// assert!(session.user.password.is_none());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: CreateUser) -> Result<AuthSession, AuthError> {
        self.validator
            .validate(&input)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let password_hash = hash_password(&input.password)?;
        let new_user = NewUser {
            name: input.name,
            lastname: input.lastname,
            email: input.email,
            phone: input.phone,
            password_hash,
            status: UserStatus::Active,
        };

        let mut user = self.repo.create(new_user).await.map_err(|e| match e {
            ModelError::DuplicateKey(key) => {
                debug!(%key, "user exists");
                AuthError::UserAlreadyExists
            }
            other => AuthError::Internal(other.to_string()),
        })?;
        user.password = None;
        info!(user_id = user.id, "user_registered");

        let token = self.tokens.issue(&user).map_err(|e| {
            warn!(user_id = user.id, error = ?e, "token issue failed after registration");
            e
        })?;
        Ok(AuthSession { user, token })
    }

    /// Authenticate by email and password.
    ///
    /// Unknown email, wrong password and malformed input all yield `InvalidCredentials`.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, TokenIssuer};
    /// use service::auth::domain::{CreateUser, LoginInput};
    /// use service::user::repository::memory::InMemoryUserRepository;
    /// use service::validation::Validator;
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryUserRepository::new());
    /// let svc = AuthService::new(repo, Validator::new(), TokenIssuer::new("secret", chrono::Duration::hours(24)));
    /// let _ = tokio_test::block_on(svc.register(CreateUser {
    ///     name: "N".into(), lastname: "L".into(), email: "u@e.com".into(), phone: "1".into(), password: "Passw0rd".into(),
    /// }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(svc.verify_token(&session.token).unwrap().email, "u@e.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        if self.validator.validate(&input).is_err() {
            return Err(AuthError::InvalidCredentials);
        }

        let mut user = self.repo.get_by_email(&input.email).await.map_err(|e| match e {
            ModelError::NotFound => AuthError::InvalidCredentials,
            other => AuthError::Internal(other.to_string()),
        })?;

        let stored = user.password.take().ok_or(AuthError::InvalidCredentials)?;
        if !verify_password(&stored, &input.password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;
        info!(user_id = user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> { self.tokens.verify(token) }

    /// Verify `token` and require that its account still exists and is not deleted.
    ///
    /// A token of a missing or deleted account is `InvalidToken`.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.tokens.verify(token)?;
        let user = self.repo.get_by_id(claims.user_id).await.map_err(|e| match e {
            ModelError::NotFound => AuthError::InvalidToken,
            other => AuthError::Internal(other.to_string()),
        })?;
        if user.status == Some(UserStatus::Deleted) {
            debug!(user_id = user.id, "token of deleted account");
            return Err(AuthError::InvalidToken);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::repository::memory::InMemoryUserRepository;
    use chrono::Duration;

    fn service() -> (AuthService<InMemoryUserRepository>, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let svc = AuthService::new(repo.clone(), Validator::new(), TokenIssuer::new("test-secret", Duration::hours(24)));
        (svc, repo)
    }

    fn create_user(email: &str, phone: &str) -> CreateUser {
        CreateUser {
            name: "Ann".into(),
            lastname: "Lee".into(),
            email: email.into(),
            phone: phone.into(),
            password: "Passw0rd!".into(),
        }
    }

    #[tokio::test]
    async fn register_hashes_password_and_issues_token() {
        let (svc, repo) = service();
        let session = svc.register(create_user("ann@example.com", "100")).await.unwrap();
        assert!(session.user.password.is_none());
        assert_eq!(session.user.status, Some(UserStatus::Active));

        let stored = repo.get_by_id(session.user.id).await.unwrap();
        let hash = stored.password.unwrap();
        assert_ne!(hash, "Passw0rd!");
        assert!(verify_password(&hash, "Passw0rd!"));

        let claims = svc.verify_token(&session.token).unwrap();
        assert_eq!(claims.user_id, session.user.id);
        assert_eq!(claims.email, "ann@example.com");
    }

    #[tokio::test]
    async fn register_twice_conflicts() {
        let (svc, _) = service();
        svc.register(create_user("ann@example.com", "100")).await.unwrap();
        let err = svc.register(create_user("ann@example.com", "101")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
        assert_eq!(err.code(), 1002);
    }

    #[tokio::test]
    async fn register_reports_fields_in_order() {
        let (svc, repo) = service();
        let input = CreateUser { name: String::new(), email: "bad".into(), password: "short".into(), ..create_user("", "100") };
        let err = svc.register(input).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "field name is a required field, field email is not a valid email, field password is not valid"
        );
        assert!(matches!(repo.get_by_email("bad").await, Err(ModelError::NotFound)));
    }

    #[tokio::test]
    async fn login_errors_do_not_reveal_which_part_failed() {
        let (svc, _) = service();
        svc.register(create_user("ann@example.com", "100")).await.unwrap();

        let wrong_pw = svc
            .login(LoginInput { email: "ann@example.com".into(), password: "Wrong-pass".into() })
            .await
            .unwrap_err();
        let unknown = svc
            .login(LoginInput { email: "nobody@example.com".into(), password: "Passw0rd!".into() })
            .await
            .unwrap_err();
        let malformed = svc
            .login(LoginInput { email: "not-an-email".into(), password: "x".into() })
            .await
            .unwrap_err();
        for err in [wrong_pw, unknown, malformed] {
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "invalid credentials");
        }
    }

    #[tokio::test]
    async fn login_returns_verifiable_token() {
        let (svc, _) = service();
        let reg = svc.register(create_user("ann@example.com", "100")).await.unwrap();
        let session = svc
            .login(LoginInput { email: "ann@example.com".into(), password: "Passw0rd!".into() })
            .await
            .unwrap();
        assert_eq!(session.user.id, reg.user.id);
        assert!(session.user.password.is_none());
        assert_eq!(svc.verify_token(&session.token).unwrap().user_id, reg.user.id);
    }

    #[tokio::test]
    async fn deleted_user_cannot_log_in() {
        let (svc, repo) = service();
        let reg = svc.register(create_user("ann@example.com", "100")).await.unwrap();
        repo.anonymize_and_mark_deleted(reg.user.id).await.unwrap();
        let err = svc
            .login(LoginInput { email: "ann@example.com".into(), password: "Passw0rd!".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn authenticate_rejects_tokens_of_deleted_accounts() {
        let (svc, repo) = service();
        let reg = svc.register(create_user("ann@example.com", "100")).await.unwrap();
        assert_eq!(svc.authenticate(&reg.token).await.unwrap().user_id, reg.user.id);

        repo.anonymize_and_mark_deleted(reg.user.id).await.unwrap();
        // Signature and expiry are still fine, the account is not.
        assert!(svc.verify_token(&reg.token).is_ok());
        assert!(matches!(svc.authenticate(&reg.token).await, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn authenticate_rejects_tokens_of_unknown_accounts() {
        let (svc, _) = service();
        let ghost = crate::user::domain::User { id: 42, email: Some("ghost@example.com".into()), ..Default::default() };
        let token = TokenIssuer::new("test-secret", Duration::hours(24)).issue(&ghost).unwrap();
        assert!(matches!(svc.authenticate(&token).await, Err(AuthError::InvalidToken)));
    }
}
