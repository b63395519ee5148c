use std::sync::Arc;

use models::errors::ModelError;
use tracing::{info, instrument};

use super::domain::{UpdateUser, User, UserProfile, UserStatus};
use super::repository::UserRepository;
use crate::errors::ServiceError;
use crate::validation::Validator;

/// Profile reads, edits and account deletion.
pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
    validator: Validator,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>, validator: Validator) -> Self { Self { repo, validator } }

    /// The user with its latest bookings, rentals and payments.
    #[instrument(skip(self))]
    pub async fn profile(&self, id: i64) -> Result<UserProfile, ServiceError> {
        let mut profile = self.repo.get_by_id_with_relations(id).await.map_err(map_user_err)?;
        live(&profile.user)?;
        profile.user.password = None;
        Ok(profile)
    }

    /// Apply the present fields of `input` and return the stored result.
    ///
    /// A deleted account is `NotFound`; its anonymized row never takes new values.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: UpdateUser) -> Result<User, ServiceError> {
        self.validator.validate(&input)?;
        self.repo.update(id, input.into()).await.map_err(map_user_err)?;
        let mut user = self.repo.get_by_id(id).await.map_err(map_user_err)?;
        user.password = None;
        info!(user_id = id, "user_updated");
        Ok(user)
    }

    /// Anonymize the account. Repeating the call leaves the same state.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.anonymize_and_mark_deleted(id).await.map_err(map_user_err)?;
        info!(user_id = id, "user_deleted");
        Ok(())
    }
}

fn live(user: &User) -> Result<(), ServiceError> {
    match user.status {
        Some(UserStatus::Deleted) => Err(ServiceError::not_found("user")),
        _ => Ok(()),
    }
}

fn map_user_err(err: ModelError) -> ServiceError {
    match err {
        ModelError::NotFound => ServiceError::not_found("user"),
        ModelError::DuplicateKey(_) => ServiceError::Conflict("user already exists".into()),
        other => ServiceError::from(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::domain::{NewUser, UserStatus};
    use crate::user::repository::memory::InMemoryUserRepository;

    async fn seeded() -> (UserService<InMemoryUserRepository>, Arc<InMemoryUserRepository>, User) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let mk = |email: &str, phone: &str| NewUser {
            name: "Ann".into(),
            lastname: "Lee".into(),
            email: email.into(),
            phone: phone.into(),
            password_hash: "hash".into(),
            status: UserStatus::Active,
        };
        let u = repo.create(mk("ann@example.com", "100")).await.unwrap();
        repo.create(mk("bob@example.com", "200")).await.unwrap();
        (UserService::new(repo.clone(), Validator::new()), repo, u)
    }

    #[tokio::test]
    async fn update_returns_updated_user_without_password() {
        let (svc, _, u) = seeded().await;
        let got = svc
            .update(u.id, UpdateUser { phone: Some("101".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(got.phone.as_deref(), Some("101"));
        assert_eq!(got.name.as_deref(), Some("Ann"));
        assert!(got.password.is_none());
    }

    #[tokio::test]
    async fn update_validates_present_fields() {
        let (svc, _, u) = seeded().await;
        let err = svc
            .update(u.id, UpdateUser { name: Some(String::new()), email: Some("nope".into()), ..Default::default() })
            .await
            .unwrap_err();
        match err {
            ServiceError::Validation(msg) => {
                assert_eq!(msg, "field name is not valid, field email is not a valid email")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_conflict_and_not_found() {
        let (svc, _, u) = seeded().await;
        let conflict = svc.update(u.id, UpdateUser { email: Some("bob@example.com".into()), ..Default::default() }).await;
        assert!(matches!(conflict, Err(ServiceError::Conflict(_))));
        let missing = svc.update(999, UpdateUser::default()).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (svc, repo, u) = seeded().await;
        svc.delete(u.id).await.unwrap();
        svc.delete(u.id).await.unwrap();
        let gone = repo.get_by_id(u.id).await.unwrap();
        assert_eq!(gone.status, Some(UserStatus::Deleted));
        assert!(gone.email.is_none() && gone.phone.is_none() && gone.name.is_none());
        assert!(matches!(svc.delete(999).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn profile_hides_password() {
        let (svc, _, u) = seeded().await;
        let p = svc.profile(u.id).await.unwrap();
        assert_eq!(p.user.id, u.id);
        assert!(p.user.password.is_none());
    }

    #[tokio::test]
    async fn deleted_user_is_not_found_and_stays_anonymized() {
        let (svc, repo, u) = seeded().await;
        svc.delete(u.id).await.unwrap();

        assert!(matches!(svc.profile(u.id).await, Err(ServiceError::NotFound(_))));
        let edit = UpdateUser { email: Some("ann2@example.com".into()), name: Some("Ann".into()), ..Default::default() };
        assert!(matches!(svc.update(u.id, edit).await, Err(ServiceError::NotFound(_))));

        let row = repo.get_by_id(u.id).await.unwrap();
        assert!(row.email.is_none() && row.name.is_none());
        assert_eq!(row.status, Some(UserStatus::Deleted));
    }
}
