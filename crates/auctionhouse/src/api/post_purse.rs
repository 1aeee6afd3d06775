use {
    crate::api::{AppState, AuctionErrorWrapper},
    axum::{
        extract::{Path, State},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Json, Response},
    },
    model::{Crore, FranchiseName},
    serde::Deserialize,
    std::sync::Arc,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurseRequest {
    /// New total purse in crore. Also resets the remaining purse.
    pub total: f64,
}

pub async fn post_purse_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Json(request): Json<PurseRequest>,
) -> Response {
    let auth = state.authority(&headers);
    match state
        .house
        .set_purse(auth, &FranchiseName::new(name), Crore(request.total))
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => AuctionErrorWrapper(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::api::test_util::{admin_headers, app_state},
    };

    #[tokio::test]
    async fn purse_edit_requires_admin() {
        let state = app_state();
        let response = post_purse_handler(
            State(state.clone()),
            Path("X".to_string()),
            HeaderMap::new(),
            Json(PurseRequest { total: 120. }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = post_purse_handler(
            State(state.clone()),
            Path("X".to_string()),
            admin_headers(),
            Json(PurseRequest { total: 120. }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let franchise = state.house.franchise(&"X".into()).unwrap();
        assert_eq!(franchise.purse_total, Crore(120.));
    }
}
