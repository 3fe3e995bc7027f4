//! Reservation module: three-layer architecture (domain, repository, service).
//!
//! Create and look up parking bookings keyed by email.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ReservationService;
