/// Small kana that combine with the FOLLOWING character (geminate marker).
const SMALL_PRECEDING: [char; 1] = ['っ'];

/// Small kana that combine with the PRECEDING character (glides and small vowels).
const SMALL_SUCCEEDING: [char; 8] = ['ゃ', 'ゅ', 'ょ', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ'];

fn is_small_preceding(ch: char) -> bool {
    SMALL_PRECEDING.contains(&ch)
}

fn is_small_succeeding(ch: char) -> bool {
    SMALL_SUCCEEDING.contains(&ch)
}

/// Split a word into the indivisible units that may appear as a single
/// falling block.
///
/// Fusion rules:
/// - a small glide/vowel (ゃゅょぁぃぅぇぉ) fuses with the preceding character:
///   きゅ stays one token;
/// - a small っ fuses with the following character (っこ), and with a glide
///   after that if present (っしゃ becomes one token);
/// - everything else is its own single-character token.
///
/// Fusion is greedy and local; a character is consumed by at most one fusion.
/// Concatenating the returned tokens always reproduces the input exactly.
pub fn tokenize(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut tokens = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        if is_small_preceding(ch) {
            if let Some(next_ch) = next {
                match chars.get(i + 2).copied() {
                    Some(after) if is_small_succeeding(after) => {
                        // っ + base + glide, e.g. っ + し + ゃ
                        tokens.push([ch, next_ch, after].iter().collect());
                        i += 3;
                    }
                    _ => {
                        tokens.push([ch, next_ch].iter().collect());
                        i += 2;
                    }
                }
                continue;
            }
            // Trailing っ with no fusion partner.
            tokens.push(ch.to_string());
            i += 1;
            continue;
        }

        match next {
            Some(next_ch) if is_small_succeeding(next_ch) => {
                tokens.push([ch, next_ch].iter().collect());
                i += 2;
            }
            _ => {
                tokens.push(ch.to_string());
                i += 1;
            }
        }
    }

    tokens
}

/// Returns true if the string is non-empty and every character is a kanji
/// (Han script), with no kana or other scripts mixed in.
pub fn is_pure_kanji(input: &str) -> bool {
    let mut chars = input.chars().peekable();
    if chars.peek().is_none() {
        return false;
    }
    chars.all(is_kanji_char)
}

fn is_kanji_char(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}'   // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}' // Extension A
        | '\u{F900}'..='\u{FAFF}' // Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}' // Extension B
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glide_fuses_with_preceding() {
        assert_eq!(tokenize("こきゅう"), vec!["こ", "きゅ", "う"]);
        assert_eq!(tokenize("りょうり"), vec!["りょ", "う", "り"]);
    }

    #[test]
    fn test_small_tsu_fuses_with_following() {
        assert_eq!(tokenize("がっこう"), vec!["が", "っこ", "う"]);
        assert_eq!(tokenize("きって"), vec!["き", "って"]);
    }

    #[test]
    fn test_small_tsu_plus_glide_fuses_three() {
        assert_eq!(tokenize("いらっしゃい"), vec!["い", "ら", "っしゃ", "い"]);
    }

    #[test]
    fn test_trailing_small_tsu_stands_alone() {
        assert_eq!(tokenize("あっ"), vec!["あ", "っ"]);
    }

    #[test]
    fn test_standalone_small_vowel_stands_alone() {
        assert_eq!(tokenize("ゃあ"), vec!["ゃ", "あ"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_kanji_text_splits_per_character() {
        assert_eq!(tokenize("学校"), vec!["学", "校"]);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let samples = [
            "こきゅう",
            "がっこう",
            "いらっしゃい",
            "べんきょう",
            "ざっし",
            "っ",
            "ゅ",
            "にほんご",
        ];
        for sample in samples {
            let rebuilt: String = tokenize(sample).concat();
            assert_eq!(rebuilt, sample);
        }
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        assert_eq!(tokenize("べんきょう"), tokenize("べんきょう"));
    }

    #[test]
    fn test_is_pure_kanji() {
        assert!(is_pure_kanji("学校"));
        assert!(is_pure_kanji("雨"));
        assert!(!is_pure_kanji("食べ物"));
        assert!(!is_pure_kanji("あめ"));
        assert!(!is_pure_kanji(""));
    }
}
