//! Rule-based kana romanization.

use super::Romanizer;

/// Rule-based Hepburn romanization of hiragana and katakana.
///
/// Follows the catalog's conventions: long vowels are not marked (`ou`,
/// `oo` and `uu` collapse), ん before b/m/p is written `m`, and the
/// result is capitalised with no spaces. ASCII letters and digits pass
/// through (full-width forms are narrowed). Everything else, kanji
/// included, is dropped: a name mixing kanji and kana keeps only its kana
/// part, so put a [`ReadingRomanizer`](super::ReadingRomanizer) in front
/// of this one for names that contain kanji.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaRomanizer;

impl Romanizer for KanaRomanizer {
    fn romanize(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().map(narrow).map(to_hiragana).collect();
        let mut out = String::new();
        let mut run = String::new();
        let mut geminate = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            i += 1;

            if c == 'っ' {
                geminate = true;
                continue;
            }
            if c == 'ー' {
                continue;
            }
            if c == 'ん' {
                let labial = chars
                    .get(i)
                    .and_then(|&n| syllable(n))
                    .is_some_and(|s| s.starts_with(['b', 'm', 'p']));
                run.push(if labial { 'm' } else { 'n' });
                geminate = false;
                continue;
            }

            let Some(base) = syllable(c) else {
                out.push_str(&collapse_long_vowels(&run));
                run.clear();
                geminate = false;
                if c.is_ascii_alphanumeric() {
                    out.push(c);
                }
                continue;
            };

            let mut romaji = base.to_string();
            if let Some(&next) = chars.get(i)
                && let Some(vowel) = small_y_vowel(next)
                && romaji.len() > 1
                && romaji.ends_with('i')
            {
                romaji.pop();
                if !(romaji.ends_with("sh") || romaji.ends_with("ch") || romaji == "j") {
                    romaji.push('y');
                }
                romaji.push(vowel);
                i += 1;
            }

            if geminate {
                if romaji.starts_with("ch") {
                    run.push('t');
                } else if let Some(first) = romaji.chars().next().filter(|c| !is_vowel(*c)) {
                    run.push(first);
                }
                geminate = false;
            }
            run.push_str(&romaji);
        }
        out.push_str(&collapse_long_vowels(&run));

        capitalize(&out)
    }
}

/// Full-width ASCII to half-width.
fn narrow(c: char) -> char {
    match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    }
}

/// Katakana to hiragana. ヵ and ヶ map to ゕ and ゖ.
fn to_hiragana(c: char) -> char {
    match c {
        'ァ'..='ヶ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn small_y_vowel(c: char) -> Option<char> {
    match c {
        'ゃ' => Some('a'),
        'ゅ' => Some('u'),
        'ょ' => Some('o'),
        _ => None,
    }
}

/// Hepburn for a single hiragana character.
fn syllable(c: char) -> Option<&'static str> {
    let romaji = match c {
        'あ' | 'ぁ' => "a",
        'い' | 'ぃ' | 'ゐ' => "i",
        'う' | 'ぅ' => "u",
        'え' | 'ぇ' | 'ゑ' => "e",
        'お' | 'ぉ' | 'を' => "o",
        'か' | 'ゕ' => "ka",
        'き' => "ki",
        'く' => "ku",
        'け' | 'ゖ' => "ke",
        'こ' => "ko",
        'が' => "ga",
        'ぎ' => "gi",
        'ぐ' => "gu",
        'げ' => "ge",
        'ご' => "go",
        'さ' => "sa",
        'し' => "shi",
        'す' => "su",
        'せ' => "se",
        'そ' => "so",
        'ざ' => "za",
        'じ' | 'ぢ' => "ji",
        'ず' | 'づ' => "zu",
        'ぜ' => "ze",
        'ぞ' => "zo",
        'た' => "ta",
        'ち' => "chi",
        'つ' => "tsu",
        'て' => "te",
        'と' => "to",
        'だ' => "da",
        'で' => "de",
        'ど' => "do",
        'な' => "na",
        'に' => "ni",
        'ぬ' => "nu",
        'ね' => "ne",
        'の' => "no",
        'は' => "ha",
        'ひ' => "hi",
        'ふ' => "fu",
        'へ' => "he",
        'ほ' => "ho",
        'ば' => "ba",
        'び' => "bi",
        'ぶ' => "bu",
        'べ' => "be",
        'ぼ' => "bo",
        'ぱ' => "pa",
        'ぴ' => "pi",
        'ぷ' => "pu",
        'ぺ' => "pe",
        'ぽ' => "po",
        'ま' => "ma",
        'み' => "mi",
        'む' => "mu",
        'め' => "me",
        'も' => "mo",
        'や' | 'ゃ' => "ya",
        'ゆ' | 'ゅ' => "yu",
        'よ' | 'ょ' => "yo",
        'ら' => "ra",
        'り' => "ri",
        'る' => "ru",
        'れ' => "re",
        'ろ' => "ro",
        'わ' | 'ゎ' => "wa",
        'ゔ' => "vu",
        _ => return None,
    };
    Some(romaji)
}

fn collapse_long_vowels(s: &str) -> String {
    s.replace("ou", "o").replace("oo", "o").replace("uu", "u")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
