use serde_json::Value;
use shared::{Reservation, ReserveOutcome, ReserveRequest};
use uuid::Uuid;

use crate::api::client::{ApiClient, ApiError};

pub async fn reserve(api: &ApiClient, request: &ReserveRequest) -> Result<ReserveOutcome, ApiError> {
    let outcome = api
        .post_json::<ReserveOutcome>("/reservations", request)
        .await?;
    log::info!(
        "Api create reservation, session={session_id}, outcome={outcome:?}",
        session_id = request.session_id
    );
    Ok(outcome)
}

pub async fn cancel(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    let endpoint = format!("/reservations/{id}/cancel");
    api.patch::<Value>(&endpoint).await?;
    log::info!("Api cancel reservation, id={id}");
    Ok(())
}

pub async fn my_reservations(api: &ApiClient) -> Result<Vec<Reservation>, ApiError> {
    let reservations = api.get::<Vec<Reservation>>("/me/reservations").await?;
    log::info!("Api list my reservations, count={}", reservations.len());
    Ok(reservations)
}
