//! Auction state machine and bid-validation engine.
//!
//! The engine owns the single source of truth for a running auction: the
//! franchise ledger, the player catalog, the bidding session and the outcome
//! ledger. [`state::AuctionState`] implements every operation as a pure
//! synchronous state transition; [`house::AuctionHouse`] wraps it in one
//! exclusive lock so that concurrent request handlers apply mutations
//! one at a time and reads observe consistent snapshots.

pub mod error;
pub mod house;
pub mod order;
pub mod state;

pub use self::{
    error::AuctionError,
    house::AuctionHouse,
    state::{AuctionState, Authority, BID_INCREMENT},
};
