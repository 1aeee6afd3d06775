use {
    crate::{franchise::FranchiseName, money::Crore, player::PlayerId},
    serde::{Deserialize, Serialize},
};

/// The single currently leading bid for the player under auction.
/// Superseded by every accepted higher bid, never accumulated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub player: PlayerId,
    pub franchise: FranchiseName,
    pub amount: Crore,
}

/// Point-in-time view of the auction session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub started: bool,
    /// Total number of players in the bidding order. Zero before the first
    /// start and after a roster reload.
    pub order_len: usize,
    /// Index of the player currently under the hammer. `None` before the
    /// auction starts and after it ends; may equal `order_len` once every
    /// player has been processed.
    pub position: Option<usize>,
}
