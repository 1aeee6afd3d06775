use {
    crate::api::{AppState, AuctionErrorWrapper},
    axum::{
        extract::State,
        response::{IntoResponse, Json, Response},
    },
    model::Crore,
    serde::Deserialize,
    std::sync::Arc,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    /// The identity that claimed a franchise; the core resolves which one.
    pub claimant: String,
    /// Bid amount in crore.
    pub amount: f64,
}

pub async fn post_bid_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BidRequest>,
) -> Response {
    match state.house.place_bid(&request.claimant, Crore(request.amount)) {
        Ok(bid) => {
            tracing::debug!(franchise = %bid.franchise, amount = %bid.amount, "bid placed");
            Json(bid).into_response()
        }
        Err(err) => {
            tracing::debug!(?request, ?err, "bid rejected");
            AuctionErrorWrapper(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::api::{
            Error,
            response_body,
            test_util::app_state,
        },
        auction::Authority,
        axum::http::StatusCode,
        model::Bid,
    };

    fn bid(claimant: &str, amount: f64) -> Json<BidRequest> {
        Json(BidRequest {
            claimant: claimant.to_string(),
            amount,
        })
    }

    #[tokio::test]
    async fn bid_before_start_is_rejected() {
        let response = post_bid_handler(State(app_state()), bid("alice", 2.)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Error = serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(error.error_type, "NotStarted");
    }

    #[tokio::test]
    async fn successful_bid_echoes_the_leader() {
        let state = app_state();
        state.house.claim_franchise(&"X".into(), "alice").unwrap();
        state.house.start_auction(Authority::Admin).unwrap();

        let response = post_bid_handler(State(state.clone()), bid("alice", 2.)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let accepted: Bid = serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(accepted.franchise, "X".into());
        assert_eq!(accepted.amount, Crore(2.));
        assert_eq!(state.house.leading_bid(), Some(accepted));
    }

    #[tokio::test]
    async fn low_bid_reports_required_minimum() {
        let state = app_state();
        state.house.claim_franchise(&"X".into(), "alice").unwrap();
        state.house.claim_franchise(&"Y".into(), "bob").unwrap();
        state.house.start_auction(Authority::Admin).unwrap();
        post_bid_handler(State(state.clone()), bid("alice", 2.)).await;

        let response = post_bid_handler(State(state), bid("bob", 2.)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Error = serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(error.error_type, "BidTooLow");
        assert!(error.description.contains("2.10"));
    }
}
