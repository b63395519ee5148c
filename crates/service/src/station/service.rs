use std::sync::Arc;

use models::errors::ModelError;
use tracing::{info, instrument};

use super::domain::{Station, StationLocation};
use super::repository::StationRepository;
use crate::errors::ServiceError;
use crate::validation::Validator;

pub struct StationService<R: StationRepository + ?Sized> {
    repo: Arc<R>,
    validator: Validator,
}

impl<R: StationRepository + ?Sized> StationService<R> {
    pub fn new(repo: Arc<R>, validator: Validator) -> Self { Self { repo, validator } }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: StationLocation) -> Result<Station, ServiceError> {
        self.validator.validate(&input)?;
        let station = self.repo.create(&input.location_street).await.map_err(map_station_err)?;
        info!(station_id = station.id, "station_created");
        Ok(station)
    }

    #[instrument(skip(self))]
    pub async fn by_id(&self, id: i64) -> Result<Station, ServiceError> {
        self.repo.get_by_id(id).await.map_err(map_station_err)
    }

    #[instrument(skip(self, input))]
    pub async fn update_location(&self, id: i64, input: StationLocation) -> Result<Station, ServiceError> {
        self.validator.validate(&input)?;
        self.repo.update_location(id, &input.location_street).await.map_err(map_station_err)?;
        self.by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete(id).await.map_err(|e| match e {
            ModelError::ConstraintViolation(_) => ServiceError::Conflict("station still has bicycles".into()),
            other => map_station_err(other),
        })?;
        info!(station_id = id, "station_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_bikes_available(&self, id: i64, delta: i32) -> Result<Station, ServiceError> {
        self.repo.update_bikes_available(id, delta).await.map_err(map_counter_err)?;
        self.by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_bikes_total(&self, id: i64, delta: i32) -> Result<Station, ServiceError> {
        self.repo.update_bikes_total(id, delta).await.map_err(map_counter_err)?;
        self.by_id(id).await
    }
}

fn map_station_err(err: ModelError) -> ServiceError {
    match err {
        ModelError::NotFound => ServiceError::not_found("station"),
        other => ServiceError::from(other),
    }
}

fn map_counter_err(err: ModelError) -> ServiceError {
    match err {
        ModelError::ConstraintViolation(_) => ServiceError::Validation("bike count cannot become negative".into()),
        ModelError::OutOfRange(_) => ServiceError::Validation("bike count out of range".into()),
        other => map_station_err(other),
    }
}
