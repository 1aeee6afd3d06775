//! The auction state store and every state transition on it.
//!
//! All operations here are plain synchronous mutations; [`crate::house`]
//! is responsible for serializing them behind a lock.

use {
    crate::{error::AuctionError, order},
    indexmap::IndexMap,
    model::{Bid, Crore, Franchise, FranchiseName, Outcome, PlayerId, PlayerRecord, SessionStatus},
    rand::Rng,
    std::collections::BTreeMap,
};

/// Fixed minimum step between a leading bid and the next acceptable one.
pub const BID_INCREMENT: Crore = Crore(0.1);

/// Tolerance absorbing floating point representation error in amount
/// comparisons.
const AMOUNT_EPSILON: f64 = 1e-6;

/// Capability supplied by the presentation layer with every call that needs
/// it. The core never manages credentials itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Authority {
    Participant,
    Admin,
}

impl Authority {
    fn ensure_admin(self) -> Result<(), AuctionError> {
        match self {
            Self::Admin => Ok(()),
            Self::Participant => Err(AuctionError::NotAuthorized),
        }
    }
}

/// Mutable bidding session. Reset whenever the roster is reloaded or the
/// auction ends.
#[derive(Clone, Debug, Default)]
struct Session {
    started: bool,
    /// Bidding sequence, fixed once built.
    order: Vec<PlayerId>,
    /// Index into `order`. `None` is the not-started sentinel; the index may
    /// run one past the end once every player has been processed.
    position: Option<usize>,
    leading_bid: Option<Bid>,
}

/// The single source of truth: franchise ledger, player catalog, bidding
/// session and outcome ledger.
#[derive(Clone, Debug)]
pub struct AuctionState {
    /// Keyed by name, preserving the configured order.
    franchises: IndexMap<FranchiseName, Franchise>,
    catalog: BTreeMap<PlayerId, PlayerRecord>,
    session: Session,
    outcomes: BTreeMap<PlayerId, Outcome>,
}

impl AuctionState {
    /// Creates a state with the configured franchises and an empty catalog.
    pub fn new(franchises: impl IntoIterator<Item = (FranchiseName, Crore)>) -> Self {
        Self {
            franchises: franchises
                .into_iter()
                .map(|(name, purse)| (name.clone(), Franchise::new(name, purse)))
                .collect(),
            catalog: BTreeMap::new(),
            session: Session::default(),
            outcomes: BTreeMap::new(),
        }
    }

    /// Replaces the player catalog wholesale and invalidates any in-progress
    /// auction: the session resets to not-started and recorded outcomes are
    /// cleared. Franchise purses and squads from prior sessions are kept.
    ///
    /// An empty roster is valid input and simply leaves the catalog empty.
    pub fn reload_catalog(
        &mut self,
        auth: Authority,
        records: Vec<PlayerRecord>,
    ) -> Result<usize, AuctionError> {
        auth.ensure_admin()?;
        self.catalog = records.into_iter().map(|p| (p.id, p)).collect();
        self.session = Session::default();
        self.outcomes.clear();
        tracing::info!(players = self.catalog.len(), "catalog reloaded");
        Ok(self.catalog.len())
    }

    /// Assigns a franchise to a claimant. A claimant holds at most one
    /// franchise, so any previous claim of theirs is released first.
    pub fn claim_franchise(
        &mut self,
        name: &FranchiseName,
        claimant: &str,
    ) -> Result<(), AuctionError> {
        if self.session.started {
            return Err(AuctionError::AlreadyStarted);
        }
        if !self.franchises.contains_key(name) {
            return Err(AuctionError::InvalidFranchise);
        }
        if self.franchises[name].is_claimed() {
            return Err(AuctionError::AlreadyClaimed);
        }
        for franchise in self.franchises.values_mut() {
            if franchise.claimed_by.as_deref() == Some(claimant) {
                franchise.claimed_by = None;
            }
        }
        self.franchises[name].claimed_by = Some(claimant.to_string());
        tracing::debug!(franchise = %name, claimant, "franchise claimed");
        Ok(())
    }

    /// Clears the claimant of a franchise.
    pub fn release_franchise(&mut self, name: &FranchiseName) -> Result<(), AuctionError> {
        if self.session.started {
            return Err(AuctionError::AlreadyStarted);
        }
        let franchise = self
            .franchises
            .get_mut(name)
            .ok_or(AuctionError::InvalidFranchise)?;
        franchise.claimed_by = None;
        Ok(())
    }

    /// Administrator edit of a franchise purse. Only allowed before the
    /// auction begins; resets both total and remaining.
    pub fn set_purse(
        &mut self,
        auth: Authority,
        name: &FranchiseName,
        total: Crore,
    ) -> Result<(), AuctionError> {
        auth.ensure_admin()?;
        if self.session.started {
            return Err(AuctionError::AlreadyStarted);
        }
        if total.0 < 0. {
            return Err(AuctionError::InvalidAmount);
        }
        let franchise = self
            .franchises
            .get_mut(name)
            .ok_or(AuctionError::InvalidFranchise)?;
        franchise.purse_total = total;
        franchise.purse_remaining = total;
        Ok(())
    }

    /// Builds the bidding order and opens the session. Rebuilding discards
    /// all prior session progress but keeps recorded outcomes.
    pub fn start_auction(
        &mut self,
        auth: Authority,
        rng: &mut impl Rng,
    ) -> Result<SessionStatus, AuctionError> {
        auth.ensure_admin()?;
        if self.catalog.is_empty() {
            return Err(AuctionError::EmptyCatalog);
        }
        self.session = Session {
            started: true,
            order: order::build(&self.catalog, rng),
            position: Some(0),
            leading_bid: None,
        };
        tracing::info!(players = self.session.order.len(), "auction started");
        Ok(self.session_status())
    }

    /// Validates and records a bid from the identity `claimant`.
    ///
    /// A successful bid replaces the current leader unconditionally; no bid
    /// history is kept and no purse is touched until the sale is confirmed.
    pub fn place_bid(&mut self, claimant: &str, amount: Crore) -> Result<Bid, AuctionError> {
        if !self.session.started {
            return Err(AuctionError::NotStarted);
        }
        let franchise = self
            .franchises
            .values()
            .find(|f| f.claimed_by.as_deref() == Some(claimant))
            .ok_or(AuctionError::NoClaimant)?;
        let player = self
            .current_player()
            .ok_or(AuctionError::NoActivePlayer)?
            .clone();
        if !amount.is_positive() {
            return Err(AuctionError::InvalidAmount);
        }
        let minimum = self
            .minimum_bid()
            .ok_or(AuctionError::NoActivePlayer)?;
        if amount.0 < minimum.0 - AMOUNT_EPSILON {
            return Err(AuctionError::BidTooLow { minimum });
        }
        if amount.0 > franchise.purse_remaining.0 + AMOUNT_EPSILON {
            return Err(AuctionError::InsufficientPurse);
        }
        let bid = Bid {
            player: player.id,
            franchise: franchise.name.clone(),
            amount,
        };
        tracing::debug!(player = %player.id, franchise = %bid.franchise, %amount, "bid accepted");
        self.session.leading_bid = Some(bid.clone());
        Ok(bid)
    }

    /// Commits the leading bid: debits the winner, extends their squad,
    /// records the outcome and advances to the next player.
    pub fn confirm_sale(&mut self, auth: Authority) -> Result<Outcome, AuctionError> {
        auth.ensure_admin()?;
        if !self.session.started {
            return Err(AuctionError::NotStarted);
        }
        let player = self
            .current_player()
            .ok_or(AuctionError::NoActivePlayer)?
            .id;
        let bid = self
            .session
            .leading_bid
            .take()
            .ok_or(AuctionError::NoBid)?;
        let franchise = self
            .franchises
            .get_mut(&bid.franchise)
            .ok_or(AuctionError::InvalidFranchise)?;
        franchise.purse_remaining = franchise.purse_remaining - bid.amount;
        franchise.squad.push(player);
        let outcome = Outcome::sold(player, bid.franchise.clone(), bid.amount);
        self.outcomes.insert(player, outcome.clone());
        tracing::info!(
            player = %player,
            franchise = %bid.franchise,
            price = %bid.amount,
            "player sold"
        );
        self.advance();
        Ok(outcome)
    }

    /// Records a no-sale for the current player. Any active leading bid is
    /// discarded without crediting anyone.
    pub fn mark_unsold(&mut self, auth: Authority) -> Result<Outcome, AuctionError> {
        auth.ensure_admin()?;
        if !self.session.started {
            return Err(AuctionError::NotStarted);
        }
        let player = self
            .current_player()
            .ok_or(AuctionError::NoActivePlayer)?
            .id;
        let outcome = Outcome::unsold(player);
        self.outcomes.insert(player, outcome.clone());
        tracing::info!(player = %player, "player unsold");
        self.advance();
        Ok(outcome)
    }

    /// Administrator override: moves on without recording an outcome. The
    /// player can only reappear if the order is rebuilt.
    pub fn skip_player(&mut self, auth: Authority) -> Result<(), AuctionError> {
        auth.ensure_admin()?;
        if !self.session.started {
            return Err(AuctionError::NotStarted);
        }
        if self.current_player().is_none() {
            return Err(AuctionError::NoActivePlayer);
        }
        self.advance();
        Ok(())
    }

    /// Closes the session. Outcomes already recorded are retained, as are
    /// purchased squads and spent purses; only the session pointer resets.
    pub fn end_auction(&mut self, auth: Authority) -> Result<(), AuctionError> {
        auth.ensure_admin()?;
        self.session.started = false;
        self.session.position = None;
        self.session.leading_bid = None;
        tracing::info!("auction ended");
        Ok(())
    }

    fn advance(&mut self) {
        self.session.leading_bid = None;
        if let Some(position) = self.session.position.as_mut() {
            *position += 1;
        }
    }

    // ---- read accessors ----

    pub fn franchises(&self) -> Vec<Franchise> {
        self.franchises.values().cloned().collect()
    }

    pub fn franchise(&self, name: &FranchiseName) -> Result<Franchise, AuctionError> {
        self.franchises
            .get(name)
            .cloned()
            .ok_or(AuctionError::InvalidFranchise)
    }

    pub fn catalog(&self) -> Vec<PlayerRecord> {
        self.catalog.values().cloned().collect()
    }

    pub fn session_status(&self) -> SessionStatus {
        SessionStatus {
            started: self.session.started,
            order_len: self.session.order.len(),
            position: self.session.position,
        }
    }

    /// The player currently under the hammer, if any.
    pub fn current_player(&self) -> Option<&PlayerRecord> {
        if !self.session.started {
            return None;
        }
        let position = self.session.position?;
        let id = self.session.order.get(position)?;
        self.catalog.get(id)
    }

    pub fn leading_bid(&self) -> Option<Bid> {
        self.session.leading_bid.clone()
    }

    /// Minimum acceptable next bid for the current player: the base price if
    /// nobody has bid yet, otherwise the leader plus the fixed increment.
    pub fn minimum_bid(&self) -> Option<Crore> {
        let player = self.current_player()?;
        Some(match &self.session.leading_bid {
            Some(bid) => bid.amount + BID_INCREMENT,
            None => player.base_price.to_crore(),
        })
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.values().cloned().collect()
    }
}
