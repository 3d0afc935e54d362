//! Orthographic variants of a station query.
//!
//! Station names are typed inconsistently: people drop the 前 from
//! "xx前" stations, add a trailing 駅, or write ケ where the search
//! service has ヶ (and ノ for の). The normalizer produces the spellings to
//! try, in the order they should be tried. It does no I/O.

/// Appended when a station is named after a landmark it sits in front of.
const MAE_SUFFIX: &str = "前";

/// Appended when the query omits the word for station.
const STATION_SUFFIX: &str = "駅";

/// Pairs of characters that are used interchangeably in station names.
/// Tried in this order, after the suffix variants.
const SWAPS: &[(char, char)] = &[('ヶ', 'ケ'), ('ノ', 'の')];

/// Produces the ordered spelling variants for a query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNormalizer;

impl NameNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Every variant of `name` to try, most literal first.
    ///
    /// 1. `name` itself
    /// 2. `name` + 前
    /// 3. `name` + 駅
    /// 4. ヶ swapped with ケ, when `name` contains either
    /// 5. ノ swapped with の, when `name` contains either
    ///
    /// A suffix already present is not appended twice, and a variant equal
    /// to an earlier one is dropped. Blank input yields no variants.
    pub fn variants(&self, name: &str) -> Vec<String> {
        let name = name.trim();
        if name.is_empty() {
            return Vec::new();
        }

        let mut variants = vec![name.to_string()];
        for suffix in [MAE_SUFFIX, STATION_SUFFIX] {
            if !name.ends_with(suffix) {
                variants.push(format!("{name}{suffix}"));
            }
        }
        for &(a, b) in SWAPS {
            if let Some(swapped) = swap_chars(name, a, b) {
                variants.push(swapped);
            }
        }

        let mut seen = std::collections::HashSet::new();
        variants.retain(|v| seen.insert(v.clone()));
        variants
    }
}

/// Replace every `a` with `b` and every `b` with `a`.
///
/// Returns `None` when `s` contains neither.
fn swap_chars(s: &str, a: char, b: char) -> Option<String> {
    if !s.contains([a, b]) {
        return None;
    }
    Some(
        s.chars()
            .map(|c| match c {
                c if c == a => b,
                c if c == b => a,
                c => c,
            })
            .collect(),
    )
}
