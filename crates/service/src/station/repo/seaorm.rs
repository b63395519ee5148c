use chrono::Utc;
use models::errors::ModelError;
use models::station;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::station::domain::Station;
use crate::station::repository::{BikeCounter, StationRepository};

pub struct SeaOrmStationRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl StationRepository for SeaOrmStationRepository {
    async fn create(&self, location_street: &str) -> Result<Station, ModelError> {
        let am = station::ActiveModel {
            location_street: Set(location_street.to_string()),
            bikes_available: Set(0),
            bikes_total: Set(0),
            created_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<Station, ModelError> {
        station::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Station::from)
            .ok_or(ModelError::NotFound)
    }

    async fn update_location(&self, id: i64, location_street: &str) -> Result<(), ModelError> {
        let res = station::Entity::update_many()
            .col_expr(station::Column::LocationStreet, Expr::value(location_street))
            .filter(station::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ModelError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ModelError> {
        let res = station::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ModelError::NotFound);
        }
        Ok(())
    }

    /// `UPDATE stations SET col = col + $delta WHERE id = $id`, serialized by the database.
    async fn add_bikes(&self, id: i64, counter: BikeCounter, delta: i32) -> Result<(), ModelError> {
        let col = match counter {
            BikeCounter::Available => station::Column::BikesAvailable,
            BikeCounter::Total => station::Column::BikesTotal,
        };
        let res = station::Entity::update_many()
            .col_expr(col, Expr::col(col).add(delta))
            .filter(station::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ModelError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use std::sync::Arc;

    #[tokio::test]
    async fn crud_round() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmStationRepository::new(db);

        let s = repo.create("Main Street 1").await?;
        assert_eq!((s.bikes_available, s.bikes_total), (0, 0));

        repo.update_location(s.id, "Second Avenue 22").await?;
        assert_eq!(repo.get_by_id(s.id).await?.location_street, "Second Avenue 22");

        repo.update_bikes_total(s.id, 5).await?;
        repo.update_bikes_available(s.id, 3).await?;
        let got = repo.get_by_id(s.id).await?;
        assert_eq!((got.bikes_available, got.bikes_total), (3, 5));

        let below = repo.update_bikes_available(s.id, -4).await;
        assert!(matches!(below, Err(ModelError::ConstraintViolation(_))));
        assert_eq!(repo.get_by_id(s.id).await?.bikes_available, 3);

        // integer overflow in the UPDATE is reported by SQLSTATE, not as a bare database error
        repo.update_bikes_total(s.id, i32::MAX - 5).await?;
        let over = repo.update_bikes_total(s.id, i32::MAX).await;
        assert!(matches!(over, Err(ModelError::OutOfRange(_))), "{over:?}");
        assert_eq!(repo.get_by_id(s.id).await?.bikes_total, i32::MAX);

        repo.delete(s.id).await?;
        assert!(matches!(repo.delete(s.id).await, Err(ModelError::NotFound)));
        assert!(matches!(repo.update_bikes_total(s.id, 1).await, Err(ModelError::NotFound)));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_increments_are_not_lost() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = Arc::new(SeaOrmStationRepository::new(db));
        let s = repo.create("Concurrency Lane 7").await?;
        let id = s.id;
        repo.update_bikes_available(id, 50).await?;

        let mut handles = Vec::new();
        for i in 0..40 {
            let repo = repo.clone();
            let delta = if i % 4 == 0 { -1 } else { 1 };
            handles.push(tokio::spawn(async move { repo.update_bikes_available(id, delta).await }));
        }
        for h in handles {
            h.await??;
        }

        // 30 increments, 10 decrements
        assert_eq!(repo.get_by_id(id).await?.bikes_available, 70);
        repo.delete(id).await?;
        Ok(())
    }
}
