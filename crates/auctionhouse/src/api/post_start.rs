use {
    crate::api::{AppState, AuctionErrorWrapper},
    axum::{
        extract::State,
        http::HeaderMap,
        response::{IntoResponse, Json, Response},
    },
    std::sync::Arc,
};

pub async fn post_start_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let auth = state.authority(&headers);
    match state.house.start_auction(auth) {
        Ok(status) => Json(status).into_response(),
        Err(err) => AuctionErrorWrapper(err).into_response(),
    }
}
