//! Service layer for parking reservations.
//! - Separates the booking rules from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Maps storage failures onto `ServiceError` so the HTTP layer never sees `DbErr`.

pub mod errors;
pub mod reservation;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
