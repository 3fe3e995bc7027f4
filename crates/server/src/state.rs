use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::reservation::{
    repo::seaorm::SeaOrmReservationRepository, repository::ReservationRepository, ReservationService,
};

/// Shared handler state; cheap to clone per request.
#[derive(Clone)]
pub struct ServerState {
    pub reservations: Arc<ReservationService<dyn ReservationRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ReservationRepository>) -> Self {
        Self { reservations: Arc::new(ReservationService::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmReservationRepository::new(db)))
    }
}
