use {
    crate::money::Lakh,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Sequential identifier assigned by the roster loader. Only unique within
/// one loaded catalog; a reload starts over from 1.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single roster entry. Immutable once loaded; the whole catalog is
/// replaced wholesale on re-load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    /// Set number. Determines the deterministic part of the auction order.
    pub tier: u32,
    /// Set code, e.g. "M1" for the marquee set. Display only.
    pub tier_label: String,
    pub first_name: String,
    pub surname: String,
    pub country: String,
    pub base_price: Lakh,
    /// Playing role, e.g. "BATTER". May be empty.
    #[serde(default)]
    pub role: String,
}

impl PlayerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_parts() {
        let player = PlayerRecord {
            first_name: "Virat".to_string(),
            surname: "Kohli".to_string(),
            ..Default::default()
        };
        assert_eq!(player.full_name(), "Virat Kohli");
    }

    #[test]
    fn serializes_with_camel_case_and_transparent_id() {
        let player = PlayerRecord {
            id: PlayerId(7),
            tier: 2,
            tier_label: "M2".to_string(),
            base_price: Lakh(200.),
            ..Default::default()
        };
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["tierLabel"], "M2");
        assert_eq!(json["basePrice"], 200.);
    }

    #[test]
    fn full_name_handles_missing_part() {
        let player = PlayerRecord {
            first_name: String::new(),
            surname: "Kohli".to_string(),
            ..Default::default()
        };
        assert_eq!(player.full_name(), "Kohli");
    }
}
