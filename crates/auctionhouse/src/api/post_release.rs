use {
    crate::api::{AppState, AuctionErrorWrapper},
    axum::{
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    },
    model::FranchiseName,
    std::sync::Arc,
};

pub async fn post_release_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.house.release_franchise(&FranchiseName::new(name)) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => AuctionErrorWrapper(err).into_response(),
    }
}
