use {
    crate::api::{AppState, AuctionErrorWrapper},
    axum::{
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Json, Response},
    },
    model::FranchiseName,
    serde::Deserialize,
    std::sync::Arc,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    /// Display name identifying the participant across requests.
    pub claimant: String,
}

pub async fn post_claim_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(request): Json<ClaimRequest>,
) -> Response {
    let name = FranchiseName::new(name);
    match state.house.claim_franchise(&name, &request.claimant) {
        Ok(()) => {
            tracing::debug!(franchise = %name, claimant = request.claimant, "claim accepted");
            StatusCode::OK.into_response()
        }
        Err(err) => AuctionErrorWrapper(err).into_response(),
    }
}
