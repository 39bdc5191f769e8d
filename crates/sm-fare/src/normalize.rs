//! Station-name normalisation for route matching.
//!
//! Fare tables and navigation parameters spell stations differently
//! (`"Ga Sài Gòn"`, `"SAI GON"`, `"Hồ Chí Minh"`).  Both sides are passed
//! through [`normalize_station`] and compared for exact equality.
//!
//! ```text
//! "  ga  Sài   Gòn " → "GA SAI GON" → "SAI GON" → "HO CHI MINH"
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Leading token some sources put in front of every station name.
const STATION_PREFIX: &str = "GA ";

/// Known spellings of the same city, applied after all other steps.
const STATION_ALIASES: &[(&str, &str)] = &[("SAI GON", "HO CHI MINH")];

/// Canonical uppercase ASCII-ish form of a station name.
pub fn normalize_station(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_stroke)
        .collect();

    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    let unprefixed = collapsed.strip_prefix(STATION_PREFIX).unwrap_or(&collapsed);

    STATION_ALIASES
        .iter()
        .find(|(from, _)| *from == unprefixed)
        .map(|(_, to)| (*to).to_owned())
        .unwrap_or_else(|| unprefixed.to_owned())
}

/// `Đ` carries a stroke, not a combining mark, so NFD leaves it intact.
#[inline]
fn fold_stroke(c: char) -> char {
    match c {
        'Đ' | 'đ' => 'D',
        other => other,
    }
}
