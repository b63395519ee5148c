use async_trait::async_trait;
use models::errors::ModelError;

use super::domain::{NewUser, User, UserProfile, UserUpdate};

/// Number of bookings, rentals and payments included in a profile.
pub const RECENT_LIMIT: u64 = 10;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. A taken email or phone yields `ModelError::DuplicateKey`.
    async fn create(&self, user: NewUser) -> Result<User, ModelError>;
    async fn get_by_id(&self, id: i64) -> Result<User, ModelError>;
    async fn get_by_email(&self, email: &str) -> Result<User, ModelError>;
    async fn get_by_id_with_relations(&self, id: i64) -> Result<UserProfile, ModelError>;
    async fn update(&self, id: i64, changes: UserUpdate) -> Result<(), ModelError>;
    /// Clear personal fields and mark the row deleted. The id is kept.
    async fn anonymize_and_mark_deleted(&self, id: i64) -> Result<(), ModelError>;
}

/// In-memory repository for tests, benches and doc examples
pub mod memory {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::user::domain::UserStatus;

    #[derive(Default)]
    pub struct InMemoryUserRepository {
        inner: Mutex<State>,
    }

    #[derive(Default)]
    struct State {
        users: HashMap<i64, User>,
        next_id: i64,
    }

    impl State {
        fn taken(&self, except: Option<i64>, email: Option<&str>, phone: Option<&str>) -> bool {
            self.users.values().filter(|u| Some(u.id) != except).any(|u| {
                (email.is_some() && u.email.as_deref() == email) || (phone.is_some() && u.phone.as_deref() == phone)
            })
        }
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self { Self::default() }

        fn state(&self) -> std::sync::MutexGuard<'_, State> {
            self.inner.lock().unwrap_or_else(|e| e.into_inner())
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn create(&self, user: NewUser) -> Result<User, ModelError> {
            let mut state = self.state();
            if state.taken(None, Some(user.email.as_str()), Some(user.phone.as_str())) {
                return Err(ModelError::DuplicateKey("users_email_or_phone".into()));
            }
            state.next_id += 1;
            let created = User {
                id: state.next_id,
                name: Some(user.name),
                lastname: Some(user.lastname),
                email: Some(user.email),
                phone: Some(user.phone),
                status: Some(user.status),
                password: Some(user.password_hash),
                created_at: Some(Utc::now()),
            };
            state.users.insert(created.id, created.clone());
            Ok(created)
        }

        async fn get_by_id(&self, id: i64) -> Result<User, ModelError> {
            self.state().users.get(&id).cloned().ok_or(ModelError::NotFound)
        }

        async fn get_by_email(&self, email: &str) -> Result<User, ModelError> {
            self.state()
                .users
                .values()
                .find(|u| u.email.as_deref() == Some(email))
                .cloned()
                .ok_or(ModelError::NotFound)
        }

        async fn get_by_id_with_relations(&self, id: i64) -> Result<UserProfile, ModelError> {
            let user = self.get_by_id(id).await?;
            Ok(UserProfile { user, bookings: Vec::new(), rentals: Vec::new(), payments: Vec::new() })
        }

        async fn update(&self, id: i64, changes: UserUpdate) -> Result<(), ModelError> {
            let mut state = self.state();
            match state.users.get(&id) {
                Some(u) if u.status != Some(UserStatus::Deleted) => {}
                _ => return Err(ModelError::NotFound),
            }
            if state.taken(Some(id), changes.email.as_deref(), changes.phone.as_deref()) {
                return Err(ModelError::DuplicateKey("users_email_or_phone".into()));
            }
            let Some(user) = state.users.get_mut(&id) else { return Err(ModelError::NotFound) };
            if let Some(v) = changes.name { user.name = Some(v); }
            if let Some(v) = changes.lastname { user.lastname = Some(v); }
            if let Some(v) = changes.email { user.email = Some(v); }
            if let Some(v) = changes.phone { user.phone = Some(v); }
            if let Some(v) = changes.password_hash { user.password = Some(v); }
            if let Some(v) = changes.status { user.status = Some(v); }
            Ok(())
        }

        async fn anonymize_and_mark_deleted(&self, id: i64) -> Result<(), ModelError> {
            let mut state = self.state();
            let user = state.users.get_mut(&id).ok_or(ModelError::NotFound)?;
            *user = User { id, status: Some(UserStatus::Deleted), ..Default::default() };
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryUserRepository;
    use super::*;
    use crate::user::domain::UserStatus;

    fn new_user(email: &str, phone: &str) -> NewUser {
        NewUser {
            name: "Ann".into(),
            lastname: "Lee".into(),
            email: email.into(),
            phone: phone.into(),
            password_hash: "hash".into(),
            status: UserStatus::Active,
        }
    }

    #[tokio::test]
    async fn duplicate_email_or_phone_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("a@example.com", "1")).await.unwrap();
        assert!(matches!(repo.create(new_user("a@example.com", "2")).await, Err(ModelError::DuplicateKey(_))));
        assert!(matches!(repo.create(new_user("b@example.com", "1")).await, Err(ModelError::DuplicateKey(_))));
    }

    #[tokio::test]
    async fn partial_update_keeps_unset_fields() {
        let repo = InMemoryUserRepository::new();
        let u = repo.create(new_user("a@example.com", "1")).await.unwrap();
        repo.update(u.id, UserUpdate { name: Some("Bo".into()), ..Default::default() }).await.unwrap();
        let got = repo.get_by_id(u.id).await.unwrap();
        assert_eq!(got.name.as_deref(), Some("Bo"));
        assert_eq!(got.lastname.as_deref(), Some("Lee"));
        assert!(matches!(repo.update(999, UserUpdate::default()).await, Err(ModelError::NotFound)));
    }

    #[tokio::test]
    async fn anonymize_frees_email() {
        let repo = InMemoryUserRepository::new();
        let u = repo.create(new_user("a@example.com", "1")).await.unwrap();
        repo.anonymize_and_mark_deleted(u.id).await.unwrap();
        assert!(matches!(repo.get_by_email("a@example.com").await, Err(ModelError::NotFound)));
        repo.create(new_user("a@example.com", "1")).await.unwrap();
    }

    #[tokio::test]
    async fn anonymized_row_rejects_updates() {
        let repo = InMemoryUserRepository::new();
        let u = repo.create(new_user("a@example.com", "1")).await.unwrap();
        repo.anonymize_and_mark_deleted(u.id).await.unwrap();

        let edit = UserUpdate { email: Some("b@example.com".into()), ..Default::default() };
        assert!(matches!(repo.update(u.id, edit).await, Err(ModelError::NotFound)));
        assert!(matches!(repo.update(u.id, UserUpdate::default()).await, Err(ModelError::NotFound)));
        assert!(repo.get_by_id(u.id).await.unwrap().email.is_none());
    }
}
