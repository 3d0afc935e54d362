//! Romanization of Japanese station names.
//!
//! Identifier synthesis needs a Latin-script station component. The
//! `Romanizer` trait is the seam. The builtin chain is:
//!
//! 1. `TableRomanizer`: exact names whose catalog spelling is irregular
//! 2. `ReadingRomanizer`: kanji rewritten to kana through a reading dictionary
//! 3. `KanaRomanizer`: rule-based Hepburn for the kana
//!
//! Romanizers are total. The builtin chain returns a non-empty string for
//! any name containing kana, kanji, or ASCII letters and digits.

use std::collections::HashMap;

mod kana;
mod readings;

pub use kana::KanaRomanizer;
pub use readings::ReadingRomanizer;

/// Converts a station name to Latin script.
pub trait Romanizer: Send + Sync {
    fn romanize(&self, text: &str) -> String;
}

impl<F> Romanizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn romanize(&self, text: &str) -> String {
        self(text)
    }
}

/// Kanji station names with their catalog spelling.
const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    ("東京", "Tokyo"),
    ("新宿", "Shinjuku"),
    ("渋谷", "Shibuya"),
    ("池袋", "Ikebukuro"),
    ("品川", "Shinagawa"),
    ("上野", "Ueno"),
    ("秋葉原", "Akihabara"),
    ("有楽町", "Yurakucho"),
    ("新橋", "Shimbashi"),
    ("浜松町", "Hamamatsucho"),
    ("田町", "Tamachi"),
    ("大崎", "Osaki"),
    ("五反田", "Gotanda"),
    ("目黒", "Meguro"),
    ("恵比寿", "Ebisu"),
    ("原宿", "Harajuku"),
    ("代々木", "Yoyogi"),
    ("高田馬場", "Takadanobaba"),
    ("目白", "Mejiro"),
    ("大塚", "Otsuka"),
    ("巣鴨", "Sugamo"),
    ("駒込", "Komagome"),
    ("田端", "Tabata"),
    ("日暮里", "Nippori"),
    ("鶯谷", "Uguisudani"),
    ("御徒町", "Okachimachi"),
    ("神田", "Kanda"),
    ("大手町", "Otemachi"),
    ("日本橋", "Nihombashi"),
    ("銀座", "Ginza"),
    ("浅草", "Asakusa"),
    ("押上", "Oshiage"),
    ("横浜", "Yokohama"),
    ("舞浜", "Maihama"),
    ("水道橋", "Suidobashi"),
    ("霞ケ関", "Kasumigaseki"),
    ("市ケ谷", "Ichigaya"),
    ("御茶ノ水", "Ochanomizu"),
    ("読売ランド前", "YomiuriLandMae"),
    ("高輪ゲートウェイ", "TakanawaGateway"),
    ("明治神宮前", "MeijiJingumae"),
    ("羽田空港第1・第2ターミナル", "HanedaAirportTerminal1and2"),
];

/// Exact-match overrides in front of another romanizer.
#[derive(Debug, Clone)]
pub struct TableRomanizer<R = ReadingRomanizer> {
    overrides: HashMap<String, String>,
    fallback: R,
}

impl TableRomanizer<ReadingRomanizer> {
    /// Builtin catalog spellings in front of the builtin reading dictionary.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_OVERRIDES.iter().copied(), ReadingRomanizer::builtin())
    }
}

impl<R: Romanizer> TableRomanizer<R> {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>, fallback: R) -> Self {
        let overrides = entries
            .into_iter()
            .map(|(name, roman)| (name.to_string(), roman.to_string()))
            .collect();
        Self {
            overrides,
            fallback,
        }
    }
}

impl<R: Romanizer> Romanizer for TableRomanizer<R> {
    fn romanize(&self, text: &str) -> String {
        match self.overrides.get(text) {
            Some(roman) => roman.clone(),
            None => self.fallback.romanize(text),
        }
    }
}
