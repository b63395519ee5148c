use async_trait::async_trait;
use models::errors::ModelError;

use super::domain::Station;

/// Which counter a relative update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BikeCounter {
    Available,
    Total,
}

/// Repository abstraction for stations.
///
/// Counter updates are relative and atomic: concurrent callers never lose an increment,
/// and a result below zero fails with `ModelError::ConstraintViolation`.
#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn create(&self, location_street: &str) -> Result<Station, ModelError>;
    async fn get_by_id(&self, id: i64) -> Result<Station, ModelError>;
    async fn update_location(&self, id: i64, location_street: &str) -> Result<(), ModelError>;
    async fn delete(&self, id: i64) -> Result<(), ModelError>;
    async fn add_bikes(&self, id: i64, counter: BikeCounter, delta: i32) -> Result<(), ModelError>;

    async fn update_bikes_available(&self, id: i64, delta: i32) -> Result<(), ModelError> {
        self.add_bikes(id, BikeCounter::Available, delta).await
    }

    async fn update_bikes_total(&self, id: i64, delta: i32) -> Result<(), ModelError> {
        self.add_bikes(id, BikeCounter::Total, delta).await
    }
}

/// In-memory repository for tests
pub mod memory {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryStationRepository {
        inner: Mutex<(HashMap<i64, Station>, i64)>,
    }

    impl InMemoryStationRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl StationRepository for InMemoryStationRepository {
        async fn create(&self, location_street: &str) -> Result<Station, ModelError> {
            let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            let (stations, next_id) = &mut *guard;
            *next_id += 1;
            let station = Station {
                id: *next_id,
                location_street: location_street.to_string(),
                bikes_available: 0,
                bikes_total: 0,
                created_at: Some(Utc::now()),
            };
            stations.insert(station.id, station.clone());
            Ok(station)
        }

        async fn get_by_id(&self, id: i64) -> Result<Station, ModelError> {
            let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            guard.0.get(&id).cloned().ok_or(ModelError::NotFound)
        }

        async fn update_location(&self, id: i64, location_street: &str) -> Result<(), ModelError> {
            let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            let station = guard.0.get_mut(&id).ok_or(ModelError::NotFound)?;
            station.location_street = location_street.to_string();
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), ModelError> {
            let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            guard.0.remove(&id).map(|_| ()).ok_or(ModelError::NotFound)
        }

        async fn add_bikes(&self, id: i64, counter: BikeCounter, delta: i32) -> Result<(), ModelError> {
            let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            let station = guard.0.get_mut(&id).ok_or(ModelError::NotFound)?;
            let slot = match counter {
                BikeCounter::Available => &mut station.bikes_available,
                BikeCounter::Total => &mut station.bikes_total,
            };
            match slot.checked_add(delta) {
                Some(next) if next >= 0 => *slot = next,
                Some(_) => return Err(ModelError::ConstraintViolation("bike counter below zero".into())),
                None => return Err(ModelError::OutOfRange("bike counter overflow".into())),
            }
            Ok(())
        }
    }
}
