//! Kanji readings for station names.
//!
//! Kanji cannot be romanized by rule, so names are first rewritten into
//! kana using a dictionary of place-name readings, then handed to a kana
//! romanizer. Whole words take priority over single characters, which is
//! how irregular readings (日暮里, 御徒町) come out right.

use std::collections::HashMap;

use super::{KanaRomanizer, Romanizer};

/// Place-name words and single kanji with their usual reading in station names.
const BUILTIN_READINGS: &[(&str, &str)] = &[
    // Words whose reading is not the sum of their characters
    ("日暮里", "にっぽり"),
    ("御徒町", "おかちまち"),
    ("代々木", "よよぎ"),
    ("吉祥寺", "きちじょうじ"),
    ("高輪", "たかなわ"),
    ("神保町", "じんぼうちょう"),
    ("秋葉原", "あきはばら"),
    ("浅草", "あさくさ"),
    ("新橋", "しんばし"),
    ("日本橋", "にほんばし"),
    ("大手町", "おおてまち"),
    ("有楽町", "ゆうらくちょう"),
    ("田町", "たまち"),
    ("赤坂", "あかさか"),
    ("赤羽", "あかばね"),
    ("明治神宮", "めいじじんぐう"),
    ("表参道", "おもてさんどう"),
    ("青山", "あおやま"),
    ("六本木", "ろっぽんぎ"),
    ("麻布", "あざぶ"),
    ("十番", "じゅうばん"),
    ("広尾", "ひろお"),
    ("恵比寿", "えびす"),
    ("目黒", "めぐろ"),
    ("五反田", "ごたんだ"),
    ("品川", "しながわ"),
    ("大井", "おおい"),
    ("蒲田", "かまた"),
    ("川崎", "かわさき"),
    ("横浜", "よこはま"),
    ("中野", "なかの"),
    ("高円寺", "こうえんじ"),
    ("阿佐ケ谷", "あさがや"),
    ("荻窪", "おぎくぼ"),
    ("三鷹", "みたか"),
    ("武蔵", "むさし"),
    ("国分寺", "こくぶんじ"),
    ("立川", "たちかわ"),
    ("八王子", "はちおうじ"),
    ("千住", "せんじゅ"),
    ("錦糸町", "きんしちょう"),
    ("両国", "りょうごく"),
    ("亀戸", "かめいど"),
    ("御茶ノ水", "おちゃのみず"),
    ("水道橋", "すいどうばし"),
    ("飯田橋", "いいだばし"),
    ("市ケ谷", "いちがや"),
    ("四ツ谷", "よつや"),
    ("四谷", "よつや"),
    ("信濃町", "しなのまち"),
    ("千駄ケ谷", "せんだがや"),
    ("原宿", "はらじゅく"),
    ("渋谷", "しぶや"),
    ("新宿", "しんじゅく"),
    ("池袋", "いけぶくろ"),
    ("巣鴨", "すがも"),
    ("駒込", "こまごめ"),
    ("大塚", "おおつか"),
    ("目白", "めじろ"),
    ("高田馬場", "たかだのばば"),
    ("上野", "うえの"),
    ("鶯谷", "うぐいすだに"),
    ("田端", "たばた"),
    ("王子", "おうじ"),
    ("板橋", "いたばし"),
    ("練馬", "ねりま"),
    ("大宮", "おおみや"),
    ("浦和", "うらわ"),
    ("川口", "かわぐち"),
    ("銀座", "ぎんざ"),
    ("築地", "つきじ"),
    ("月島", "つきしま"),
    ("豊洲", "とよす"),
    ("門前仲町", "もんぜんなかちょう"),
    ("茅場町", "かやばちょう"),
    ("人形町", "にんぎょうちょう"),
    ("八丁堀", "はっちょうぼり"),
    ("京橋", "きょうばし"),
    ("霞ケ関", "かすみがせき"),
    ("国会議事堂", "こっかいぎじどう"),
    ("溜池山王", "ためいけさんのう"),
    ("虎ノ門", "とらのもん"),
    ("神谷町", "かみやちょう"),
    ("永田町", "ながたちょう"),
    ("半蔵門", "はんぞうもん"),
    ("九段下", "くだんした"),
    ("竹橋", "たけばし"),
    ("後楽園", "こうらくえん"),
    ("春日", "かすが"),
    ("本郷", "ほんごう"),
    ("湯島", "ゆしま"),
    ("根津", "ねづ"),
    ("千駄木", "せんだぎ"),
    ("町屋", "まちや"),
    ("綾瀬", "あやせ"),
    ("押上", "おしあげ"),
    ("曳舟", "ひきふね"),
    ("浅草橋", "あさくさばし"),
    ("馬喰町", "ばくろちょう"),
    ("小伝馬町", "こでんまちょう"),
    ("三越前", "みつこしまえ"),
    ("新富町", "しんとみちょう"),
    ("汐留", "しおどめ"),
    ("浜松町", "はままつちょう"),
    ("大門", "だいもん"),
    ("三田", "みた"),
    ("白金", "しろかね"),
    ("泉岳寺", "せんがくじ"),
    ("戸越", "とごし"),
    ("自由が丘", "じゆうがおか"),
    ("二子玉川", "ふたこたまがわ"),
    ("三軒茶屋", "さんげんぢゃや"),
    ("池尻大橋", "いけじりおおはし"),
    ("下北沢", "しもきたざわ"),
    ("井の頭", "いのかしら"),
    ("明大前", "めいだいまえ"),
    ("笹塚", "ささづか"),
    ("調布", "ちょうふ"),
    ("府中", "ふちゅう"),
    ("町田", "まちだ"),
    ("登戸", "のぼりと"),
    ("相模", "さがみ"),
    ("海老名", "えびな"),
    ("藤沢", "ふじさわ"),
    ("小田原", "おだわら"),
    ("江ノ島", "えのしま"),
    ("経堂", "きょうどう"),
    ("成城学園", "せいじょうがくえん"),
    ("所沢", "ところざわ"),
    ("石神井", "しゃくじい"),
    ("大泉学園", "おおいずみがくえん"),
    ("川越", "かわごえ"),
    ("和光市", "わこうし"),
    ("成増", "なります"),
    ("草加", "そうか"),
    ("越谷", "こしがや"),
    ("春日部", "かすかべ"),
    ("羽田", "はねだ"),
    ("空港", "くうこう"),
    ("天王洲", "てんのうず"),
    ("大森", "おおもり"),
    ("新木場", "しんきば"),
    ("舞浜", "まいはま"),
    ("船橋", "ふなばし"),
    ("津田沼", "つだぬま"),
    ("千葉", "ちば"),
    ("幕張", "まくはり"),
    ("市川", "いちかわ"),
    ("松戸", "まつど"),
    ("日比谷", "ひびや"),
    ("内幸町", "うちさいわいちょう"),
    ("御成門", "おなりもん"),
    ("芝公園", "しばこうえん"),
    ("都庁", "とちょう"),
    ("御苑", "ぎょえん"),
    ("丁目", "ちょうめ"),
    ("一丁目", "いっちょうめ"),
    ("清澄白河", "きよすみしらかわ"),
    ("森下", "もりした"),
    ("住吉", "すみよし"),
    ("葛西", "かさい"),
    ("浦安", "うらやす"),
    ("行徳", "ぎょうとく"),
    ("妙典", "みょうでん"),
    ("東陽町", "とうようちょう"),
    ("木場", "きば"),
    ("砂町", "すなまち"),
    ("落合", "おちあい"),
    ("早稲田", "わせだ"),
    ("神楽坂", "かぐらざか"),
    ("江戸川", "えどがわ"),
    ("護国寺", "ごこくじ"),
    ("要町", "かなめちょう"),
    ("千川", "せんかわ"),
    ("向原", "むかいはら"),
    ("氷川台", "ひかわだい"),
    ("平和台", "へいわだい"),
    ("光が丘", "ひかりがおか"),
    ("牛込", "うしごめ"),
    ("若松河田", "わかまつかわだ"),
    ("江古田", "えごた"),
    ("豊島園", "としまえん"),
    ("蔵前", "くらまえ"),
    ("勝どき", "かちどき"),
    ("国立競技場", "こくりつきょうぎじょう"),
    ("学芸大学", "がくげいだいがく"),
    ("都立大学", "とりつだいがく"),
    ("田園調布", "でんえんちょうふ"),
    ("小杉", "こすぎ"),
    ("日吉", "ひよし"),
    ("菊名", "きくな"),
    ("綱島", "つなしま"),
    ("溝の口", "みぞのくち"),
    ("鷺沼", "さぎぬま"),
    ("長津田", "ながつた"),
    ("中央林間", "ちゅうおうりんかん"),
    ("金沢文庫", "かなざわぶんこ"),
    ("横須賀", "よこすか"),
    ("鎌倉", "かまくら"),
    ("大船", "おおふな"),
    ("戸塚", "とつか"),
    ("蕨", "わらび"),
    ("柏", "かしわ"),
    // Single characters, by their most common reading in place names
    ("東", "ひがし"),
    ("西", "にし"),
    ("南", "みなみ"),
    ("北", "きた"),
    ("中", "なか"),
    ("上", "かみ"),
    ("下", "しも"),
    ("大", "おお"),
    ("小", "こ"),
    ("新", "しん"),
    ("本", "ほん"),
    ("前", "まえ"),
    ("駅", "えき"),
    ("町", "まち"),
    ("橋", "はし"),
    ("川", "かわ"),
    ("山", "やま"),
    ("田", "た"),
    ("野", "の"),
    ("谷", "や"),
    ("原", "はら"),
    ("台", "だい"),
    ("丘", "おか"),
    ("坂", "さか"),
    ("島", "しま"),
    ("井", "い"),
    ("沢", "さわ"),
    ("浜", "はま"),
    ("港", "みなと"),
    ("宮", "みや"),
    ("寺", "じ"),
    ("神", "かみ"),
    ("森", "もり"),
    ("林", "はやし"),
    ("木", "き"),
    ("松", "まつ"),
    ("竹", "たけ"),
    ("梅", "うめ"),
    ("桜", "さくら"),
    ("花", "はな"),
    ("石", "いし"),
    ("岩", "いわ"),
    ("門", "もん"),
    ("口", "くち"),
    ("戸", "と"),
    ("場", "ば"),
    ("園", "えん"),
    ("公", "こう"),
    ("学", "がく"),
    ("駒", "こま"),
    ("馬", "うま"),
    ("鳥", "とり"),
    ("鷹", "たか"),
    ("亀", "かめ"),
    ("鶴", "つる"),
    ("池", "いけ"),
    ("水", "みず"),
    ("泉", "いずみ"),
    ("海", "うみ"),
    ("日", "ひ"),
    ("月", "つき"),
    ("金", "かね"),
    ("銀", "ぎん"),
    ("白", "しろ"),
    ("赤", "あか"),
    ("青", "あお"),
    ("黒", "くろ"),
    ("緑", "みどり"),
    ("高", "たか"),
    ("長", "なが"),
    ("広", "ひろ"),
    ("平", "ひら"),
    ("千", "せん"),
    ("一", "いち"),
    ("二", "に"),
    ("三", "さん"),
    ("四", "よん"),
    ("五", "ご"),
    ("六", "ろく"),
    ("七", "なな"),
    ("八", "はち"),
    ("九", "く"),
    ("十", "じゅう"),
    ("第", "だい"),
    ("丁", "ちょう"),
    ("目", "め"),
    ("国", "こく"),
    ("立", "たち"),
    ("市", "いち"),
    ("都", "と"),
    ("府", "ふ"),
    ("村", "むら"),
    ("里", "さと"),
    ("城", "しろ"),
    ("堀", "ほり"),
    ("関", "せき"),
    ("崎", "さき"),
    ("岡", "おか"),
    ("尾", "お"),
    ("津", "つ"),
    ("瀬", "せ"),
    ("浦", "うら"),
    ("和", "わ"),
    ("江", "え"),
    ("洲", "す"),
    ("藤", "ふじ"),
    ("富", "とみ"),
    ("吉", "よし"),
    ("佐", "さ"),
    ("安", "やす"),
    ("春", "はる"),
    ("若", "わか"),
    ("清", "きよ"),
    ("豊", "とよ"),
    ("幸", "さいわい"),
    ("福", "ふく"),
    ("武", "たけ"),
    ("文", "ぶん"),
    ("明", "めい"),
    ("光", "ひかり"),
    ("旭", "あさひ"),
    ("朝", "あさ"),
    ("霞", "かすみ"),
    ("葉", "は"),
    ("草", "くさ"),
    ("荻", "おぎ"),
    ("窪", "くぼ"),
    ("蒲", "かま"),
    ("倉", "くら"),
    ("蔵", "くら"),
    ("屋", "や"),
    ("宿", "じゅく"),
    ("袋", "ふくろ"),
    ("塚", "つか"),
    ("鴨", "かも"),
    ("端", "はた"),
    ("御", "お"),
    ("茶", "ちゃ"),
    ("道", "みち"),
    ("院", "いん"),
    ("仲", "なか"),
    ("内", "うち"),
    ("表", "おもて"),
    ("向", "むかい"),
    ("河", "かわ"),
    ("住", "すみ"),
    ("舟", "ふね"),
    ("船", "ふな"),
    ("砂", "すな"),
    ("磯", "いそ"),
    ("根", "ね"),
    ("芝", "しば"),
    ("王", "おう"),
    ("子", "こ"),
    ("天", "てん"),
    ("幡", "はた"),
    ("笹", "ささ"),
    ("聖", "せい"),
    ("永", "なが"),
    ("虎", "とら"),
    ("葛", "かつ"),
    ("柴", "しば"),
    ("有", "あり"),
    ("地", "ち"),
    ("勝", "かち"),
    ("晴", "はる"),
    ("品", "しな"),
    ("成", "なり"),
    ("越", "こし"),
    ("深", "ふか"),
    ("早", "はや"),
    ("生", "お"),
    ("宇", "う"),
    ("久", "く"),
    ("保", "ほ"),
    ("会", "あい"),
    ("合", "あい"),
    ("落", "おち"),
    ("世", "せ"),
    ("多", "た"),
    ("摩", "ま"),
    ("玉", "たま"),
    ("湯", "ゆ"),
    ("桃", "もも"),
    ("菊", "きく"),
    ("鎌", "かま"),
    ("浅", "あさ"),
];

/// Repeats the reading before it (佐々木).
const ITERATION_MARK: char = '々';

/// Reads kanji through a dictionary, then romanizes the resulting kana.
///
/// Matching is greedy, longest word first. Kanji the dictionary does not
/// know are written as their code point (`U9B31`) rather than dropped, so
/// two names that differ only in an unknown kanji still romanize apart.
#[derive(Debug, Clone)]
pub struct ReadingRomanizer<R = KanaRomanizer> {
    readings: HashMap<String, String>,
    longest: usize,
    kana: R,
}

impl ReadingRomanizer<KanaRomanizer> {
    /// The builtin dictionary in front of `KanaRomanizer`.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_READINGS.iter().copied(), KanaRomanizer)
    }
}

impl Default for ReadingRomanizer<KanaRomanizer> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<R: Romanizer> ReadingRomanizer<R> {
    /// Build from `(written, reading)` pairs. Later pairs win.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>, kana: R) -> Self {
        let readings: HashMap<String, String> = entries
            .into_iter()
            .map(|(written, reading)| (written.to_string(), reading.to_string()))
            .collect();
        let longest = readings.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Self {
            readings,
            longest,
            kana,
        }
    }

    /// Rewrite `text` so that it contains no kanji.
    pub fn to_kana(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::new();
        let mut last_reading = String::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, reading)) = self.longest_match(&chars[i..]) {
                out.push_str(reading);
                last_reading = reading.to_string();
                i += len;
                continue;
            }

            let c = chars[i];
            let between_kanji = i > 0
                && chars.get(i + 1).is_some_and(|&n| is_ideograph(n))
                && (is_ideograph(chars[i - 1]) || chars[i - 1] == ITERATION_MARK);

            if c == ITERATION_MARK {
                out.push_str(&last_reading);
            } else if matches!(c, 'ヶ' | 'ケ' | 'ヵ') && between_kanji {
                // 霞ヶ関, 梅ヶ丘: the small ke between kanji reads ga.
                out.push('が');
            } else if is_ideograph(c) {
                let code = format!("U{:04X}", c as u32);
                out.push_str(&code);
                last_reading = code;
            } else {
                out.push(c);
            }
            i += 1;
        }

        out
    }

    fn longest_match(&self, chars: &[char]) -> Option<(usize, &str)> {
        if chars.first().is_none_or(|c| c.is_ascii()) {
            return None;
        }
        (1..=self.longest.min(chars.len())).rev().find_map(|len| {
            let word: String = chars[..len].iter().collect();
            self.readings.get(&word).map(|reading| (len, reading.as_str()))
        })
    }
}

impl<R: Romanizer> Romanizer for ReadingRomanizer<R> {
    fn romanize(&self, text: &str) -> String {
        self.kana.romanize(&self.to_kana(text))
    }
}

/// CJK unified ideographs, extension A, and compatibility ideographs.
fn is_ideograph(c: char) -> bool {
    matches!(c, '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}')
}
