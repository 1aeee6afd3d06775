use {
    crate::api::{AppState, AuctionErrorWrapper},
    axum::{
        extract::State,
        http::HeaderMap,
        response::{IntoResponse, Json, Response},
    },
    std::sync::Arc,
};

pub async fn post_unsold_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let auth = state.authority(&headers);
    match state.house.mark_unsold(auth) {
        Ok(outcome) => Json(outcome).into_response(),
        Err(err) => AuctionErrorWrapper(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::api::{
            response_body,
            test_util::{admin_headers, app_state},
        },
        auction::Authority,
        axum::http::StatusCode,
        model::{Crore, Outcome, PlayerId},
    };

    #[tokio::test]
    async fn unsold_discards_an_active_bid() {
        let state = app_state();
        state.house.claim_franchise(&"X".into(), "alice").unwrap();
        state.house.start_auction(Authority::Admin).unwrap();
        state.house.place_bid("alice", Crore(2.)).unwrap();

        let response = post_unsold_handler(State(state.clone()), admin_headers()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let outcome: Outcome = serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(outcome, Outcome::unsold(PlayerId(1)));

        // The discarded bid never touched the purse.
        let bidder = state.house.franchise(&"X".into()).unwrap();
        assert_eq!(bidder.purse_remaining, Crore(100.));
    }
}
