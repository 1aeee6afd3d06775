//! Shared handle around the auction state.
//!
//! Request handlers for every bidder plus the administrator operate against
//! one global auction instance. Each mutating operation runs as an
//! indivisible critical section behind a single exclusive lock: two
//! simultaneous bids for the same player are applied one at a time and the
//! loser is validated against the already-updated leader, never a lost
//! update. Read accessors clone a consistent point-in-time snapshot under
//! the same lock.

use {
    crate::{
        error::AuctionError,
        state::{AuctionState, Authority},
    },
    model::{Bid, Crore, Franchise, FranchiseName, Outcome, PlayerRecord, SessionStatus},
    std::sync::{Mutex, MutexGuard, PoisonError},
};

pub struct AuctionHouse {
    state: Mutex<AuctionState>,
}

impl AuctionHouse {
    pub fn new(franchises: impl IntoIterator<Item = (FranchiseName, Crore)>) -> Self {
        Self {
            state: Mutex::new(AuctionState::new(franchises)),
        }
    }

    /// All operations are short and never panic while holding the lock, so a
    /// poisoned lock still contains a consistent state.
    fn state(&self) -> MutexGuard<'_, AuctionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn reload_catalog(
        &self,
        auth: Authority,
        records: Vec<PlayerRecord>,
    ) -> Result<usize, AuctionError> {
        self.state().reload_catalog(auth, records)
    }

    pub fn claim_franchise(
        &self,
        name: &FranchiseName,
        claimant: &str,
    ) -> Result<(), AuctionError> {
        self.state().claim_franchise(name, claimant)
    }

    pub fn release_franchise(&self, name: &FranchiseName) -> Result<(), AuctionError> {
        self.state().release_franchise(name)
    }

    pub fn set_purse(
        &self,
        auth: Authority,
        name: &FranchiseName,
        total: Crore,
    ) -> Result<(), AuctionError> {
        self.state().set_purse(auth, name, total)
    }

    pub fn start_auction(&self, auth: Authority) -> Result<SessionStatus, AuctionError> {
        self.state().start_auction(auth, &mut rand::thread_rng())
    }

    pub fn place_bid(&self, claimant: &str, amount: Crore) -> Result<Bid, AuctionError> {
        self.state().place_bid(claimant, amount)
    }

    pub fn confirm_sale(&self, auth: Authority) -> Result<Outcome, AuctionError> {
        self.state().confirm_sale(auth)
    }

    pub fn mark_unsold(&self, auth: Authority) -> Result<Outcome, AuctionError> {
        self.state().mark_unsold(auth)
    }

    pub fn skip_player(&self, auth: Authority) -> Result<(), AuctionError> {
        self.state().skip_player(auth)
    }

    pub fn end_auction(&self, auth: Authority) -> Result<(), AuctionError> {
        self.state().end_auction(auth)
    }

    pub fn franchises(&self) -> Vec<Franchise> {
        self.state().franchises()
    }

    pub fn franchise(&self, name: &FranchiseName) -> Result<Franchise, AuctionError> {
        self.state().franchise(name)
    }

    pub fn catalog(&self) -> Vec<PlayerRecord> {
        self.state().catalog()
    }

    pub fn session_status(&self) -> SessionStatus {
        self.state().session_status()
    }

    pub fn current_player(&self) -> Option<PlayerRecord> {
        self.state().current_player().cloned()
    }

    pub fn leading_bid(&self) -> Option<Bid> {
        self.state().leading_bid()
    }

    pub fn minimum_bid(&self) -> Option<Crore> {
        self.state().minimum_bid()
    }

    /// Current player together with the leading bid and the minimum next
    /// bid, taken in one critical section so the three always refer to the
    /// same position.
    pub fn current_lot(&self) -> (Option<PlayerRecord>, Option<Bid>, Option<Crore>) {
        let state = self.state();
        (
            state.current_player().cloned(),
            state.leading_bid(),
            state.minimum_bid(),
        )
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.state().outcomes()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        model::{Lakh, PlayerId, PlayerRecord},
        std::sync::Arc,
    };

    fn house() -> Arc<AuctionHouse> {
        let house = AuctionHouse::new([("X".into(), Crore(100.)), ("Y".into(), Crore(100.))]);
        house
            .reload_catalog(Authority::Admin, vec![PlayerRecord {
                id: PlayerId(1),
                tier: 1,
                first_name: "Only".to_string(),
                base_price: Lakh(200.),
                ..Default::default()
            }])
            .unwrap();
        house.claim_franchise(&"X".into(), "alice").unwrap();
        house.claim_franchise(&"Y".into(), "bob").unwrap();
        house.start_auction(Authority::Admin).unwrap();
        house.into()
    }

    #[test]
    fn concurrent_equal_bids_never_tie() {
        // Two bidders race with the same opening amount. Whoever loses the
        // lock race must observe the winner's bid and get rejected; the
        // leader is never silently overwritten with an equal amount.
        for _ in 0..20 {
            let house = house();
            let handles: Vec<_> = ["alice", "bob"]
                .into_iter()
                .map(|claimant| {
                    let house = Arc::clone(&house);
                    std::thread::spawn(move || house.place_bid(claimant, Crore(2.)))
                })
                .collect();
            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

            let accepted = results.iter().filter(|r| r.is_ok()).count();
            assert_eq!(accepted, 1);
            assert!(results.iter().any(|r| matches!(
                r,
                Err(AuctionError::BidTooLow { .. })
            )));
            let leader = house.leading_bid().unwrap();
            assert_eq!(leader.amount, Crore(2.));
        }
    }

    #[test]
    fn concurrent_sale_debits_once() {
        let house = house();
        house.place_bid("alice", Crore(2.)).unwrap();

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let house = Arc::clone(&house);
                std::thread::spawn(move || house.confirm_sale(Authority::Admin))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        let buyer = house.franchise(&"X".into()).unwrap();
        assert_eq!(buyer.purse_remaining, Crore(98.));
        assert_eq!(buyer.squad, vec![PlayerId(1)]);
    }

    #[test]
    fn lot_snapshot_is_internally_consistent() {
        let house = house();
        house.place_bid("alice", Crore(2.)).unwrap();
        let (player, bid, minimum) = house.current_lot();
        let player = player.unwrap();
        let bid = bid.unwrap();
        assert_eq!(bid.player, player.id);
        assert_eq!(minimum.unwrap(), bid.amount + crate::BID_INCREMENT);
    }
}
