//! Auction order builder.
//!
//! Tiers are processed in ascending set-number order so the marquee set is
//! always exhausted before lower sets, while players inside one tier come up
//! in a uniformly random order so nobody can game who-bids-when among
//! similarly priced players.

use {
    itertools::Itertools,
    model::{PlayerId, PlayerRecord},
    rand::{Rng, seq::SliceRandom},
    std::collections::BTreeMap,
};

/// Builds the bidding sequence for the given catalog.
///
/// Deterministic across tiers, shuffled within each tier. An empty catalog
/// yields an empty order; the caller decides whether that is an error.
pub fn build(catalog: &BTreeMap<PlayerId, PlayerRecord>, rng: &mut impl Rng) -> Vec<PlayerId> {
    let tiers = catalog
        .values()
        .map(|player| (player.tier, player.id))
        .into_group_map();

    let mut order = Vec::with_capacity(catalog.len());
    for (_, mut ids) in tiers.into_iter().sorted_unstable_by_key(|&(tier, _)| tier) {
        ids.shuffle(rng);
        order.extend(ids);
    }
    order
}
