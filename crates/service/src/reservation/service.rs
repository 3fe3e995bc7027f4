use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{NewReservation, ReservationRecord};
use super::repository::ReservationRepository;
use crate::errors::ServiceError;

/// Reservation business service independent of web framework.
///
/// `R` may be unsized so handlers can share an `Arc<dyn ReservationRepository>`.
pub struct ReservationService<R: ReservationRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ReservationRepository + ?Sized> ReservationService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a new reservation; the email must not be taken yet.
    ///
    /// # Examples
    /// ```
    /// use service::reservation::{ReservationService, repository::mock::MockReservationRepository};
    /// use service::reservation::domain::NewReservation;
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = ReservationService::new(Arc::new(MockReservationRepository::default()));
    /// let input = NewReservation {
    ///     name: "Alice".into(), email: "a@x.com".into(), phone: "555".into(),
    ///     checkin: "2024-01-01".into(), checkout: "2024-01-02".into(),
    ///     car_model: "Civic".into(), car_size: "small".into(), license_plate: "ABC123".into(),
    /// };
    /// let rec = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(rec.details.email, "a@x.com");
    /// let again = tokio_test::block_on(svc.create(input));
    /// assert!(matches!(again, Err(ServiceError::Conflict)));
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: NewReservation) -> Result<ReservationRecord, ServiceError> {
        models::reservation::validate(&input)?;
        match self.repo.insert(&input).await {
            Ok(rec) => {
                info!(reservation_id = rec.id, "reservation_created");
                Ok(rec)
            }
            Err(ServiceError::Conflict) => {
                warn!("reservation_email_taken");
                Err(ServiceError::Conflict)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the eight stored fields for `email` (exact match).
    ///
    /// # Examples
    /// ```
    /// use service::reservation::{ReservationService, repository::mock::MockReservationRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = ReservationService::new(Arc::new(MockReservationRepository::default()));
    /// let missing = tokio_test::block_on(svc.retrieve("ghost@x.com"));
    /// assert!(matches!(missing, Err(ServiceError::NotFound)));
    /// ```
    #[instrument(skip(self))]
    pub async fn retrieve(&self, email: &str) -> Result<NewReservation, ServiceError> {
        let found = self.repo.find_by_email(email).await?;
        match found {
            Some(rec) => {
                debug!(reservation_id = rec.id, "reservation_found");
                Ok(rec.details)
            }
            None => Err(ServiceError::NotFound),
        }
    }
}
