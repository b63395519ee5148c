use chrono::Utc;
use models::errors::ModelError;
use models::{booking, payment, rental, user};
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::user::domain::{NewUser, User, UserProfile, UserStatus, UserUpdate};
use crate::user::repository::{UserRepository, RECENT_LIMIT};

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new: NewUser) -> Result<User, ModelError> {
        let am = user::ActiveModel {
            name: Set(Some(new.name)),
            lastname: Set(Some(new.lastname)),
            email: Set(Some(new.email)),
            phone: Set(Some(new.phone)),
            status: Set(Some(new.status.as_str().to_string())),
            password: Set(Some(new.password_hash)),
            created_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };
        let created = am.insert(&self.db).await?;
        Ok(created.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<User, ModelError> {
        user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(ModelError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<User, ModelError> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(ModelError::NotFound)
    }

    async fn get_by_id_with_relations(&self, id: i64) -> Result<UserProfile, ModelError> {
        let user = self.get_by_id(id).await?;

        let bookings = booking::Entity::find()
            .filter(booking::Column::UserId.eq(id))
            .order_by_desc(booking::Column::CreatedAt)
            .limit(RECENT_LIMIT)
            .all(&self.db)
            .await?;

        let rentals = rental::Entity::find()
            .filter(rental::Column::UserId.eq(id))
            .order_by_desc(rental::Column::StartTime)
            .limit(RECENT_LIMIT)
            .all(&self.db)
            .await?;

        // Payments have no user column; reach them through the user's bookings.
        let paid_by_user = Query::select()
            .column(booking::Column::PaymentId)
            .from(booking::Entity)
            .and_where(booking::Column::UserId.eq(id))
            .to_owned();
        let payments = payment::Entity::find()
            .filter(payment::Column::Id.in_subquery(paid_by_user))
            .order_by_desc(payment::Column::CreatedAt)
            .limit(RECENT_LIMIT)
            .all(&self.db)
            .await?;

        Ok(UserProfile {
            user,
            bookings: bookings.into_iter().map(Into::into).collect(),
            rentals: rentals.into_iter().map(Into::into).collect(),
            payments: payments.into_iter().map(Into::into).collect(),
        })
    }

    async fn update(&self, id: i64, changes: UserUpdate) -> Result<(), ModelError> {
        if changes.is_empty() {
            let current = self.get_by_id(id).await?;
            if current.status == Some(UserStatus::Deleted) {
                return Err(ModelError::NotFound);
            }
            return Ok(());
        }

        let mut am = <user::ActiveModel as Default>::default();
        if let Some(v) = changes.name { am.name = Set(Some(v)); }
        if let Some(v) = changes.lastname { am.lastname = Set(Some(v)); }
        if let Some(v) = changes.email { am.email = Set(Some(v)); }
        if let Some(v) = changes.phone { am.phone = Set(Some(v)); }
        if let Some(v) = changes.password_hash { am.password = Set(Some(v)); }
        if let Some(v) = changes.status { am.status = Set(Some(v.as_str().to_string())); }

        // Anonymized rows are final
        let res = user::Entity::update_many()
            .set(am)
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::Status.ne(UserStatus::Deleted.as_str()))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ModelError::NotFound);
        }
        Ok(())
    }

    async fn anonymize_and_mark_deleted(&self, id: i64) -> Result<(), ModelError> {
        let am = user::ActiveModel {
            name: Set(None),
            lastname: Set(None),
            email: Set(None),
            phone: Set(None),
            password: Set(None),
            created_at: Set(None),
            status: Set(Some(UserStatus::Deleted.as_str().to_string())),
            ..Default::default()
        };
        let res = user::Entity::update_many()
            .set(am)
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ModelError::NotFound);
        }
        Ok(())
    }
}
