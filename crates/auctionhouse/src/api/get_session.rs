use {
    crate::api::AppState,
    axum::{
        extract::State,
        response::{IntoResponse, Json, Response},
    },
    std::sync::Arc,
};

pub async fn get_session_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.house.session_status()).into_response()
}
