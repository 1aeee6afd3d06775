use {
    crate::api::AppState,
    axum::{
        extract::State,
        response::{IntoResponse, Json, Response},
    },
    std::sync::Arc,
};

pub async fn get_franchises_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.house.franchises()).into_response()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::api::{response_body, test_util::app_state},
        model::Franchise,
    };

    #[tokio::test]
    async fn lists_configured_franchises() {
        let response = get_franchises_handler(State(app_state())).await;
        let body = response_body(response).await;
        let franchises: Vec<Franchise> = serde_json::from_slice(&body).unwrap();
        assert_eq!(franchises.len(), 2);
        assert_eq!(franchises[0].name, "X".into());
    }
}
