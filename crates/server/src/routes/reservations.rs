use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use serde::{Deserialize, Serialize};
use service::reservation::domain::NewReservation;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::state::ServerState;

pub const RESERVATION_CREATED: &str = "Reservation successful!";

/// Wire shape of a reservation, used for both the create body and the lookup
/// response. The storage identifier is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReservationPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub checkin: String,
    pub checkout: String,
    pub car_model: String,
    pub car_size: String,
    pub license_plate: String,
}

impl From<ReservationPayload> for NewReservation {
    fn from(p: ReservationPayload) -> Self {
        Self {
            name: p.name,
            email: p.email,
            phone: p.phone,
            checkin: p.checkin,
            checkout: p.checkout,
            car_model: p.car_model,
            car_size: p.car_size,
            license_plate: p.license_plate,
        }
    }
}

impl From<NewReservation> for ReservationPayload {
    fn from(r: NewReservation) -> Self {
        Self {
            name: r.name,
            email: r.email,
            phone: r.phone,
            checkin: r.checkin,
            checkout: r.checkout,
            car_model: r.car_model,
            car_size: r.car_size,
            license_plate: r.license_plate,
        }
    }
}

/// Create a reservation
#[utoipa::path(
    post, path = "/reserve", tag = "reservations",
    request_body = ReservationPayload,
    responses(
        (status = 201, description = "Reservation stored", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed body or empty field", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already reserved", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_reservation(
    State(state): State<ServerState>,
    payload: Result<Json<ReservationPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let Json(payload) = payload?;
    debug!(email = %payload.email, car_size = %payload.car_size, "reservation_create_request");
    state.reservations.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(MessageBody::new(RESERVATION_CREATED))))
}

/// Retrieve a reservation by email
#[utoipa::path(
    get, path = "/retrieve/{email}", tag = "reservations",
    params(("email" = String, Path, description = "Email the reservation was made with (exact match)")),
    responses(
        (status = 200, description = "Reservation found", body = ReservationPayload),
        (status = 404, description = "No reservation for this email", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn retrieve_reservation(
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> Result<Json<ReservationPayload>, ApiError> {
    let found = state.reservations.retrieve(&email).await?;
    info!(%email, "reservation_retrieved");
    Ok(Json(found.into()))
}
