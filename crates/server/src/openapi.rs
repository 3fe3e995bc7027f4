use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::reservations::ReservationPayload;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::reservations::create_reservation,
        crate::routes::reservations::retrieve_reservation,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorDoc,
            ReservationPayload,
        )
    ),
    tags(
        (name = "health"),
        (name = "reservations")
    )
)]
pub struct ApiDoc;
