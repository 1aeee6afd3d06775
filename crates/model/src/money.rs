//! Currency units.
//!
//! Base prices come out of the roster in lakh while purses and bids are
//! denominated in crore (1 crore = 100 lakh). Keeping the two units as
//! separate types makes it impossible to debit a purse with a lakh figure
//! by accident.

use {
    serde::{Deserialize, Serialize},
    std::{fmt, ops},
};

/// An amount in lakh. Only used for roster base prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lakh(pub f64);

impl Lakh {
    pub fn to_crore(self) -> Crore {
        Crore(self.0 / 100.)
    }
}

/// An amount in crore. Purses, bids and sale prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Crore(pub f64);

impl Crore {
    pub const ZERO: Self = Self(0.);

    pub fn is_positive(self) -> bool {
        self.0 > 0.
    }
}

impl ops::Add for Crore {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl ops::Sub for Crore {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Lakh {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} L", self.0)
    }
}

impl fmt::Display for Crore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} Cr", self.0)
    }
}
