//! Line names from the station search service mapped to catalog railway ids.

use std::collections::HashMap;

/// Tokyo-area lines, keyed by the search service's line name.
const BUILTIN_RAILWAYS: &[(&str, &str)] = &[
    // JR East
    ("JR山手線", "odpt.Railway:JR-East.Yamanote"),
    ("JR中央線(快速)", "odpt.Railway:JR-East.ChuoRapid"),
    ("JR中央・総武線", "odpt.Railway:JR-East.ChuoSobuLocal"),
    ("JR総武線(快速)", "odpt.Railway:JR-East.SobuRapid"),
    ("JR京浜東北線", "odpt.Railway:JR-East.KeihinTohokuNegishi"),
    ("JR埼京線", "odpt.Railway:JR-East.SaikyoKawagoe"),
    ("JR湘南新宿ライン", "odpt.Railway:JR-East.ShonanShinjuku"),
    ("JR東海道本線", "odpt.Railway:JR-East.Tokaido"),
    ("JR横須賀線", "odpt.Railway:JR-East.Yokosuka"),
    ("JR京葉線", "odpt.Railway:JR-East.Keiyo"),
    ("JR常磐線", "odpt.Railway:JR-East.Joban"),
    ("JR高崎線", "odpt.Railway:JR-East.Takasaki"),
    ("JR宇都宮線", "odpt.Railway:JR-East.Utsunomiya"),
    ("JR武蔵野線", "odpt.Railway:JR-East.Musashino"),
    ("JR南武線", "odpt.Railway:JR-East.Nambu"),
    ("JR横浜線", "odpt.Railway:JR-East.Yokohama"),
    ("JR青梅線", "odpt.Railway:JR-East.Ome"),
    // Tokyo Metro
    ("東京メトロ銀座線", "odpt.Railway:TokyoMetro.Ginza"),
    ("東京メトロ丸ノ内線", "odpt.Railway:TokyoMetro.Marunouchi"),
    ("東京メトロ日比谷線", "odpt.Railway:TokyoMetro.Hibiya"),
    ("東京メトロ東西線", "odpt.Railway:TokyoMetro.Tozai"),
    ("東京メトロ千代田線", "odpt.Railway:TokyoMetro.Chiyoda"),
    ("東京メトロ有楽町線", "odpt.Railway:TokyoMetro.Yurakucho"),
    ("東京メトロ半蔵門線", "odpt.Railway:TokyoMetro.Hanzomon"),
    ("東京メトロ南北線", "odpt.Railway:TokyoMetro.Namboku"),
    ("東京メトロ副都心線", "odpt.Railway:TokyoMetro.Fukutoshin"),
    // Toei
    ("都営浅草線", "odpt.Railway:Toei.Asakusa"),
    ("都営三田線", "odpt.Railway:Toei.Mita"),
    ("都営新宿線", "odpt.Railway:Toei.Shinjuku"),
    ("都営大江戸線", "odpt.Railway:Toei.Oedo"),
    // Private railways
    ("東急東横線", "odpt.Railway:Tokyu.Toyoko"),
    ("東急田園都市線", "odpt.Railway:Tokyu.DenEnToshi"),
    ("東急目黒線", "odpt.Railway:Tokyu.Meguro"),
    ("東急大井町線", "odpt.Railway:Tokyu.Oimachi"),
    ("東急池上線", "odpt.Railway:Tokyu.Ikegami"),
    ("小田急小田原線", "odpt.Railway:Odakyu.Odawara"),
    ("小田急江ノ島線", "odpt.Railway:Odakyu.Enoshima"),
    ("小田急多摩線", "odpt.Railway:Odakyu.Tama"),
    ("京王線", "odpt.Railway:Keio.Keio"),
    ("京王井の頭線", "odpt.Railway:Keio.Inokashira"),
    ("京王相模原線", "odpt.Railway:Keio.Sagamihara"),
    ("西武池袋線", "odpt.Railway:Seibu.Ikebukuro"),
    ("西武新宿線", "odpt.Railway:Seibu.Shinjuku"),
    ("東武東上線", "odpt.Railway:Tobu.Tojo"),
    ("東武伊勢崎線", "odpt.Railway:Tobu.TobuSkytree"),
    ("京急本線", "odpt.Railway:Keikyu.Main"),
    ("京急空港線", "odpt.Railway:Keikyu.Airport"),
    ("京成本線", "odpt.Railway:Keisei.Main"),
    ("京成押上線", "odpt.Railway:Keisei.Oshiage"),
    ("りんかい線", "odpt.Railway:TWR.Rinkai"),
    ("ゆりかもめ", "odpt.Railway:Yurikamome.Yurikamome"),
    ("東京モノレール", "odpt.Railway:TokyoMonorail.HanedaAirport"),
];

/// Lookup from search-service line names to catalog railway ids.
///
/// `lookup` is a pure function of the table contents.
#[derive(Debug, Clone)]
pub struct RailwayCatalog {
    railways: HashMap<String, String>,
}

impl RailwayCatalog {
    /// The compiled-in railway table.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_RAILWAYS.iter().copied())
    }

    /// Build a catalog from `(line name, railway id)` pairs.
    ///
    /// Ids are stored verbatim; they are validated when used.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let railways = entries
            .into_iter()
            .map(|(line, id)| (line.to_string(), id.to_string()))
            .collect();
        Self { railways }
    }

    /// The railway id for a line name, if the line is mapped.
    pub fn lookup(&self, line_name: &str) -> Option<&str> {
        self.railways.get(line_name).map(String::as_str)
    }

    /// All `(line name, railway id)` pairs, sorted by line name.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .railways
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn len(&self) -> usize {
        self.railways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.railways.is_empty()
    }
}

impl Default for RailwayCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
