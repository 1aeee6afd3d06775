use {
    crate::api::AppState,
    axum::{
        extract::State,
        response::{IntoResponse, Json, Response},
    },
    std::sync::Arc,
};

pub async fn get_outcomes_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.house.outcomes()).into_response()
}
