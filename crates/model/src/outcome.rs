use {
    crate::{franchise::FranchiseName, money::Crore, player::PlayerId},
    serde::{Deserialize, Serialize},
};

/// Terminal record of a player's auction result. Created once by the sale
/// resolver and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub player: PlayerId,
    /// `None` means the player went unsold.
    pub franchise: Option<FranchiseName>,
    /// Zero for unsold players.
    pub price: Crore,
}

impl Outcome {
    pub fn sold(player: PlayerId, franchise: FranchiseName, price: Crore) -> Self {
        Self {
            player,
            franchise: Some(franchise),
            price,
        }
    }

    pub fn unsold(player: PlayerId) -> Self {
        Self {
            player,
            franchise: None,
            price: Crore::ZERO,
        }
    }
}
