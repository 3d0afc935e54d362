//! Colloquial station names mapped to the search service's spelling.

use std::collections::HashMap;

/// Colloquial or ambiguous names people type, and what to search for instead.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("読売ランド", "読売ランド前"),
    ("東京スカイツリー", "とうきょうスカイツリー"),
    ("スカイツリー", "とうきょうスカイツリー"),
    ("羽田空港", "羽田空港第1・第2ターミナル"),
    ("羽田", "羽田空港第1・第2ターミナル"),
    ("明治神宮", "明治神宮前"),
    ("東京ドーム", "水道橋"),
    ("ディズニーランド", "舞浜"),
    ("ディズニー", "舞浜"),
    ("お台場", "お台場海浜公園"),
    ("台場", "お台場海浜公園"),
    ("国会議事堂", "国会議事堂前"),
    ("都庁", "都庁前"),
    ("浅草寺", "浅草"),
    ("押上スカイツリー", "押上"),
    ("日比谷公園", "日比谷"),
    ("霞ヶ関駅", "霞ケ関"),
    ("市ヶ谷", "市ケ谷"),
    ("千駄ヶ谷", "千駄ケ谷"),
];

/// Lookup from colloquial station names to canonical search terms.
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// The compiled-in alias table.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_ALIASES.iter().copied())
    }

    /// Build a table from `(colloquial, canonical)` pairs.
    ///
    /// Later pairs win when a colloquial name repeats.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let aliases = entries
            .into_iter()
            .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
            .collect();
        Self { aliases }
    }

    /// Return the canonical search term for `raw`, or `raw` itself.
    pub fn resolve_alias<'a>(&'a self, raw: &'a str) -> &'a str {
        self.aliases.get(raw).map(String::as_str).unwrap_or(raw)
    }

    /// All `(colloquial, canonical)` pairs, sorted by colloquial name.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aliases_resolve() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve_alias("読売ランド"), "読売ランド前");
        assert_eq!(table.resolve_alias("東京スカイツリー"), "とうきょうスカイツリー");
    }

    #[test]
    fn unknown_names_pass_through() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve_alias("渋谷"), "渋谷");
        assert_eq!(table.resolve_alias(""), "");
    }

    #[test]
    fn builtin_has_no_duplicate_keys() {
        assert_eq!(AliasTable::builtin().len(), BUILTIN_ALIASES.len());
    }

    #[test]
    fn builtin_entries_are_non_empty() {
        for (raw, canonical) in AliasTable::builtin().entries() {
            assert!(!raw.is_empty());
            assert!(!canonical.is_empty(), "alias {raw} maps to an empty term");
        }
    }

    #[test]
    fn custom_table_replaces_builtin() {
        let table = AliasTable::from_entries([("foo", "bar")]);
        assert_eq!(table.resolve_alias("foo"), "bar");
        assert_eq!(table.resolve_alias("読売ランド"), "読売ランド");
        assert_eq!(table.entries(), vec![("foo", "bar")]);
    }
}
