use {
    crate::api::AppState,
    axum::{
        extract::State,
        response::{IntoResponse, Json, Response},
    },
    model::{Bid, Crore, PlayerRecord},
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

/// The player currently under the hammer together with the bidding context.
/// All three fields come from one consistent snapshot.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub player: Option<PlayerRecord>,
    pub leading_bid: Option<Bid>,
    pub minimum_bid: Option<Crore>,
}

pub async fn get_lot_handler(State(state): State<Arc<AppState>>) -> Response {
    let (player, leading_bid, minimum_bid) = state.house.current_lot();
    Json(Lot {
        player,
        leading_bid,
        minimum_bid,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::api::{response_body, test_util::app_state},
        auction::Authority,
        model::PlayerId,
    };

    #[tokio::test]
    async fn lot_is_empty_before_start() {
        let response = get_lot_handler(State(app_state())).await;
        let lot: Lot = serde_json::from_slice(&response_body(response).await).unwrap();
        assert!(lot.player.is_none());
        assert!(lot.leading_bid.is_none());
        assert!(lot.minimum_bid.is_none());
    }

    #[tokio::test]
    async fn lot_shows_player_and_minimum_bid() {
        let state = app_state();
        state.house.start_auction(Authority::Admin).unwrap();

        let response = get_lot_handler(State(state)).await;
        let lot: Lot = serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(lot.player.unwrap().id, PlayerId(1));
        assert!(lot.leading_bid.is_none());
        // No bids yet: bidding starts from the base price.
        assert_eq!(lot.minimum_bid, Some(Crore(2.)));
    }
}
