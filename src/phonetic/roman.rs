//! Kana → romaji.
//!
//! Readings are typed through an input method, so the romanized key is what
//! a user would type to get the kana: `を` is `wo`, `ん` is `n`, and a long
//! vowel mark repeats the vowel before it.

use smol_str::SmolStr;

/// Which romanization system produces the index key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RomanizationStyle {
    /// し → shi, ち → chi, つ → tsu, ふ → fu, じ → ji
    #[default]
    Hepburn,
    /// し → si, ち → ti, つ → tu, ふ → hu, じ → zi
    Kunrei,
}

/// Fold katakana to hiragana. Other characters pass through.
pub fn to_hiragana(c: char) -> char {
    match c {
        '\u{30A1}'..='\u{30F6}' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}

/// Check whether `c` is hiragana, katakana or the long vowel mark.
pub fn is_kana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{30A1}'..='\u{30F6}' | 'ー')
}

/// Romanize a kana reading.
///
/// Returns an empty string when `reading` is empty or contains anything
/// other than kana: a reading with kanji or Latin letters in it has no
/// well-defined key.
pub fn romanize(reading: &str, style: RomanizationStyle) -> SmolStr {
    let kana: Vec<char> = reading.chars().map(to_hiragana).collect();
    if kana.is_empty() || !kana.iter().all(|&c| is_kana(c)) {
        return SmolStr::default();
    }

    let mut out = String::with_capacity(kana.len() * 2);
    let mut geminate = false;
    let mut i = 0;
    while i < kana.len() {
        let c = kana[i];
        match c {
            'っ' => {
                // Doubled at the next syllable; a trailing っ is dropped.
                geminate = true;
                i += 1;
                continue;
            }
            'ー' => {
                if let Some(vowel) = out.chars().last().filter(|v| "aiueo".contains(*v)) {
                    out.push(vowel);
                }
                i += 1;
                continue;
            }
            _ => {}
        }

        let (syllable, used) = match kana.get(i + 1).and_then(|&next| digraph(c, next, style)) {
            Some(pair) => (pair, 2),
            None => (single(c, style), 1),
        };

        if geminate {
            if let Some(first) = syllable.chars().next().filter(|f| !"aiueon".contains(*f)) {
                // Hepburn writes っち as "tchi".
                if style == RomanizationStyle::Hepburn && syllable.starts_with("ch") {
                    out.push('t');
                } else {
                    out.push(first);
                }
            }
            geminate = false;
        }

        out.push_str(syllable);
        i += used;
    }

    SmolStr::new(out)
}

fn single(c: char, style: RomanizationStyle) -> &'static str {
    let hepburn = match c {
        'あ' | 'ぁ' => "a",
        'い' | 'ぃ' | 'ゐ' => "i",
        'う' | 'ぅ' => "u",
        'え' | 'ぇ' | 'ゑ' => "e",
        'お' | 'ぉ' => "o",
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
        'じ' => "ji",
        'ず' => "zu",
        'ぜ' => "ze",
        'ぞ' => "zo",
        'た' => "ta",
        'ち' => "chi",
        'つ' => "tsu",
        'て' => "te",
        'と' => "to",
        'だ' => "da",
        'ぢ' => "ji",
        'づ' => "zu",
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
        'を' => "wo",
        'ん' => "n",
        'ゔ' => "vu",
        _ => "",
    };
    match style {
        RomanizationStyle::Hepburn => hepburn,
        RomanizationStyle::Kunrei => match c {
            'し' => "si",
            'ち' => "ti",
            'つ' => "tu",
            'ふ' => "hu",
            'じ' | 'ぢ' => "zi",
            _ => hepburn,
        },
    }
}

/// Two-kana syllables: a consonant + i kana followed by a small kana.
fn digraph(c: char, small: char, style: RomanizationStyle) -> Option<&'static str> {
    let kunrei = style == RomanizationStyle::Kunrei;
    let out = match (c, small) {
        ('き', 'ゃ') => "kya",
        ('き', 'ゅ') => "kyu",
        ('き', 'ょ') => "kyo",
        ('ぎ', 'ゃ') => "gya",
        ('ぎ', 'ゅ') => "gyu",
        ('ぎ', 'ょ') => "gyo",
        ('し', 'ゃ') => if kunrei { "sya" } else { "sha" },
        ('し', 'ゅ') => if kunrei { "syu" } else { "shu" },
        ('し', 'ょ') => if kunrei { "syo" } else { "sho" },
        ('し', 'ぇ') => if kunrei { "sye" } else { "she" },
        ('じ' | 'ぢ', 'ゃ') => if kunrei { "zya" } else { "ja" },
        ('じ' | 'ぢ', 'ゅ') => if kunrei { "zyu" } else { "ju" },
        ('じ' | 'ぢ', 'ょ') => if kunrei { "zyo" } else { "jo" },
        ('じ', 'ぇ') => if kunrei { "zye" } else { "je" },
        ('ち', 'ゃ') => if kunrei { "tya" } else { "cha" },
        ('ち', 'ゅ') => if kunrei { "tyu" } else { "chu" },
        ('ち', 'ょ') => if kunrei { "tyo" } else { "cho" },
        ('ち', 'ぇ') => if kunrei { "tye" } else { "che" },
        ('に', 'ゃ') => "nya",
        ('に', 'ゅ') => "nyu",
        ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya",
        ('ひ', 'ゅ') => "hyu",
        ('ひ', 'ょ') => "hyo",
        ('び', 'ゃ') => "bya",
        ('び', 'ゅ') => "byu",
        ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya",
        ('ぴ', 'ゅ') => "pyu",
        ('ぴ', 'ょ') => "pyo",
        ('み', 'ゃ') => "mya",
        ('み', 'ゅ') => "myu",
        ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya",
        ('り', 'ゅ') => "ryu",
        ('り', 'ょ') => "ryo",
        ('ふ', 'ぁ') => "fa",
        ('ふ', 'ぃ') => "fi",
        ('ふ', 'ぇ') => "fe",
        ('ふ', 'ぉ') => "fo",
        ('ふ', 'ゅ') => "fyu",
        ('つ', 'ぁ') => "tsa",
        ('つ', 'ぃ') => "tsi",
        ('つ', 'ぇ') => "tse",
        ('つ', 'ぉ') => "tso",
        ('て', 'ゅ') => "tyu",
        ('で', 'ゅ') => "dyu",
        ('て', 'ぃ') => "ti",
        ('で', 'ぃ') => "di",
        ('と', 'ぅ') => "tu",
        ('ど', 'ぅ') => "du",
        ('う', 'ぃ') => "wi",
        ('う', 'ぇ') => "we",
        ('う', 'ぉ') => "wo",
        ('ゔ', 'ぁ') => "va",
        ('ゔ', 'ぃ') => "vi",
        ('ゔ', 'ぇ') => "ve",
        ('ゔ', 'ぉ') => "vo",
        _ => return None,
    };
    Some(out)
}
