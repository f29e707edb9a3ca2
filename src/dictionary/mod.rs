use std::collections::BTreeMap;

use crate::data::Lexicon;
use crate::models::{GameMode, JlptLevel, WordInfo};
use crate::utils::kana::is_pure_kanji;

/// Lookup maps for one active proficiency level, built by folding every word
/// list from N5 up to the selected level. Immutable once built; a level change
/// replaces the whole value.
#[derive(Debug, Clone)]
pub struct Dictionary {
    level: JlptLevel,
    /// reading -> word, for hiragana mode.
    hiragana: BTreeMap<String, WordInfo>,
    /// compound form -> word, for kanji mode. Only forms with 2+ characters
    /// that are pure kanji qualify; everything else stays hiragana-only.
    kanji: BTreeMap<String, WordInfo>,
}

impl Dictionary {
    /// Build the lookup maps for `level`. Pure: identical inputs always
    /// produce identical maps (BTreeMap keeps ordering deterministic).
    pub fn build(lexicon: &Lexicon, level: JlptLevel) -> Self {
        let mut hiragana = BTreeMap::new();
        let mut kanji = BTreeMap::new();

        for (entry_level, entry) in lexicon.entries_up_to(level) {
            let info = WordInfo {
                kanji: entry.kanji.clone(),
                level: entry_level,
            };
            // Lists fold lowest level first, so the first insert wins and the
            // word keeps the level that introduced it.
            hiragana
                .entry(entry.hiragana.clone())
                .or_insert_with(|| info.clone());
            if qualifies_for_kanji_view(&entry.kanji) {
                kanji.entry(entry.kanji.clone()).or_insert(info);
            }
        }

        tracing::debug!(
            level = ?level,
            hiragana_words = hiragana.len(),
            kanji_words = kanji.len(),
            "built dictionary"
        );

        Self {
            level,
            hiragana,
            kanji,
        }
    }

    pub fn level(&self) -> JlptLevel {
        self.level
    }

    /// The lookup view the match scanner uses for the given mode.
    pub fn view(&self, mode: GameMode) -> &BTreeMap<String, WordInfo> {
        match mode {
            GameMode::Hiragana => &self.hiragana,
            GameMode::Kanji => &self.kanji,
        }
    }
}

/// A word appears in the kanji view only if its compound form has 2+
/// characters and contains no kana or other scripts.
fn qualifies_for_kanji_view(kanji: &str) -> bool {
    kanji.chars().count() >= 2 && is_pure_kanji(kanji)
}
