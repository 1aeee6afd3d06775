//! Roster loader: turns an auction CSV into a validated player list.
//!
//! Input files come straight out of spreadsheets exported by whoever runs
//! the auction, so column matching is best-effort: headers are matched
//! case-insensitively by partial name and malformed rows are skipped
//! individually instead of aborting the whole load. Only the typed
//! [`PlayerRecord`] sequence ever reaches the core.

use {
    model::{Lakh, PlayerId, PlayerRecord},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster has no header row")]
    MissingHeader,
}

/// Known header spellings, in priority order. Matched by case-insensitive
/// substring, e.g. "Reserve Price Rs Lakh" matches "reserve price".
const SET_NO: &[&str] = &["set no"];
const SET_CODE: &[&str] = &["2026 set", "set code", "set"];
const FIRST_NAME: &[&str] = &["first name", "player"];
const SURNAME: &[&str] = &["surname", "last name"];
const COUNTRY: &[&str] = &["country"];
const BASE_PRICE: &[&str] = &["reserve price", "base price"];
const ROLE: &[&str] = &["specialism", "role", "playing role"];

struct Columns {
    set_no: Option<usize>,
    set_code: Option<usize>,
    first_name: Option<usize>,
    surname: Option<usize>,
    country: Option<usize>,
    base_price: Option<usize>,
    role: Option<usize>,
}

impl Columns {
    fn detect(headers: &csv::StringRecord) -> Self {
        let find = |options: &[&str]| {
            options.iter().find_map(|name| {
                headers
                    .iter()
                    .position(|header| header.to_lowercase().contains(name))
            })
        };
        Self {
            set_no: find(SET_NO),
            set_code: find(SET_CODE),
            first_name: find(FIRST_NAME),
            surname: find(SURNAME),
            country: find(COUNTRY),
            base_price: find(BASE_PRICE),
            role: find(ROLE),
        }
    }
}

fn cell<'a>(row: &'a csv::StringRecord, index: Option<usize>) -> &'a str {
    index
        .and_then(|index| row.get(index))
        .map(str::trim)
        .unwrap_or_default()
}

/// Prices arrive as "200", "INR 200", "200.0 Lakh" and similar; everything
/// but digits and dots is stripped before parsing. Unparseable cells fall
/// back to zero rather than dropping the player.
fn parse_price(raw: &str) -> Lakh {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    Lakh(digits.parse().unwrap_or(0.))
}

/// Parses a roster CSV. Ids are assigned sequentially from 1 in input
/// order. Rows without a set number or without any name part are skipped.
pub fn parse_csv(input: impl std::io::Read) -> Result<Vec<PlayerRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let columns = Columns::detect(reader.headers().map_err(|_| LoadError::MissingHeader)?);

    let mut players = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = row?;

        // A missing or empty set number defaults to tier 0; a present but
        // unparseable one marks the row as garbage.
        let tier = match cell(&row, columns.set_no) {
            "" => 0,
            raw => match raw.parse::<u32>() {
                Ok(tier) => tier,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            },
        };
        let first_name = cell(&row, columns.first_name);
        let surname = cell(&row, columns.surname);
        if first_name.is_empty() && surname.is_empty() {
            skipped += 1;
            continue;
        }

        players.push(PlayerRecord {
            id: PlayerId(players.len() as u32 + 1),
            tier,
            tier_label: cell(&row, columns.set_code).to_string(),
            first_name: first_name.to_string(),
            surname: surname.to_string(),
            country: cell(&row, columns.country).to_string(),
            base_price: parse_price(cell(&row, columns.base_price)),
            role: cell(&row, columns.role).to_string(),
        });
    }

    if skipped > 0 {
        tracing::warn!(skipped, loaded = players.len(), "skipped malformed roster rows");
    }
    Ok(players)
}
