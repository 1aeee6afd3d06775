use {model::Crore, thiserror::Error};

/// Every way a core operation can fail. All variants are caller-recoverable;
/// the presentation layer turns them into user-facing replies and none of
/// them crash the process.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AuctionError {
    #[error("auction already started")]
    AlreadyStarted,
    #[error("that franchise is already taken")]
    AlreadyClaimed,
    #[error("auction not started")]
    NotStarted,
    #[error("select a franchise before bidding")]
    NoClaimant,
    #[error("no active player")]
    NoActivePlayer,
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("bid must be at least {minimum}")]
    BidTooLow { minimum: Crore },
    #[error("not enough purse remaining")]
    InsufficientPurse,
    #[error("no bids to sell")]
    NoBid,
    #[error("no players loaded")]
    EmptyCatalog,
    #[error("administrator authority required")]
    NotAuthorized,
    #[error("unknown franchise")]
    InvalidFranchise,
    #[error("unknown player")]
    InvalidPlayer,
}
