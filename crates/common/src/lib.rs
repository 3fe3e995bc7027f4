//! Shared building blocks for the reservation workspace: logging setup,
//! startup environment checks and the JSON envelopes every endpoint speaks.

pub mod types;
pub mod utils;
pub mod env;
