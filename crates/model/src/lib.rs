//! Domain types shared between the auction engine and the API layer.

pub mod franchise;
pub mod money;
pub mod outcome;
pub mod player;
pub mod session;

pub use self::{
    franchise::{Franchise, FranchiseName},
    money::{Crore, Lakh},
    outcome::Outcome,
    player::{PlayerId, PlayerRecord},
    session::{Bid, SessionStatus},
};
