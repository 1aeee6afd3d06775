use {
    crate::api::{AppState, AuctionErrorWrapper},
    axum::{
        extract::State,
        http::HeaderMap,
        response::{IntoResponse, Json, Response},
    },
    std::sync::Arc,
};

pub async fn post_sale_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let auth = state.authority(&headers);
    match state.house.confirm_sale(auth) {
        Ok(outcome) => Json(outcome).into_response(),
        Err(err) => AuctionErrorWrapper(err).into_response(),
    }
}
