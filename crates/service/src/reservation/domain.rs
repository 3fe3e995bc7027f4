use serde::{Deserialize, Serialize};

pub use models::reservation::NewReservation;

/// Stored reservation (business view): identifier plus the eight submitted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: i32,
    #[serde(flatten)]
    pub details: NewReservation,
}

impl From<models::reservation::Model> for ReservationRecord {
    fn from(m: models::reservation::Model) -> Self {
        Self { id: m.id, details: m.into() }
    }
}
