use {
    crate::{money::Crore, player::PlayerId},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Unique franchise key, e.g. "CSK". Case preserving.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FranchiseName(pub String);

impl FranchiseName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FranchiseName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FranchiseName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A team entity with a budget, claimed by at most one participant identity
/// at a time.
///
/// Invariant: `0 <= purse_remaining <= purse_total` outside an in-flight
/// sale. The remaining purse only decreases (sales) or is reset by a
/// pre-auction purse edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Franchise {
    pub name: FranchiseName,
    pub purse_total: Crore,
    pub purse_remaining: Crore,
    /// Display name of the participant currently holding this franchise.
    pub claimed_by: Option<String>,
    /// Acquired players in purchase order.
    pub squad: Vec<PlayerId>,
}

impl Franchise {
    pub fn new(name: FranchiseName, purse: Crore) -> Self {
        Self {
            name,
            purse_total: purse,
            purse_remaining: purse,
            claimed_by: None,
            squad: Vec::new(),
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed_by.is_some()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::money::Crore};

    #[test]
    fn new_franchise_starts_with_full_purse() {
        let franchise = Franchise::new("CSK".into(), Crore(100.));
        assert_eq!(franchise.purse_remaining, franchise.purse_total);
        assert!(!franchise.is_claimed());
        assert!(franchise.squad.is_empty());
    }
}
