use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::reservation::domain::{NewReservation, ReservationRecord};
use crate::reservation::repository::ReservationRepository;

/// SeaORM-backed repository over the `reservations` table.
#[derive(Clone)]
pub struct SeaOrmReservationRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn insert(&self, input: &NewReservation) -> Result<ReservationRecord, ServiceError> {
        let created = models::reservation::create(&self.db, input).await?;
        Ok(created.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<ReservationRecord>, ServiceError> {
        let found = models::reservation::find_by_email(&self.db, email).await?;
        Ok(found.map(Into::into))
    }
}
