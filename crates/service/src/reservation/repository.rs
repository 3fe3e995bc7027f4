use async_trait::async_trait;

use super::domain::{NewReservation, ReservationRecord};
use crate::errors::ServiceError;

/// Repository abstraction for reservation persistence.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert atomically; duplicate email must yield `ServiceError::Conflict`.
    async fn insert(&self, input: &NewReservation) -> Result<ReservationRecord, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<ReservationRecord>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockReservationRepository {
        inner: Mutex<MockState>,
    }

    #[derive(Default)]
    struct MockState {
        last_id: i32,
        by_email: HashMap<String, ReservationRecord>,
    }

    impl MockReservationRepository {
        pub fn len(&self) -> usize {
            self.inner.lock().map(|s| s.by_email.len()).unwrap_or(0)
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl ReservationRepository for MockReservationRepository {
        async fn insert(&self, input: &NewReservation) -> Result<ReservationRecord, ServiceError> {
            let mut state = self.inner.lock().map_err(|e| ServiceError::Db(e.to_string()))?;
            if state.by_email.contains_key(&input.email) {
                return Err(ServiceError::Conflict);
            }
            state.last_id += 1;
            let record = ReservationRecord { id: state.last_id, details: input.clone() };
            state.by_email.insert(input.email.clone(), record.clone());
            Ok(record)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<ReservationRecord>, ServiceError> {
            let state = self.inner.lock().map_err(|e| ServiceError::Db(e.to_string()))?;
            Ok(state.by_email.get(email).cloned())
        }
    }
}
