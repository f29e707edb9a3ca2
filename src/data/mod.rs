use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{JlptLevel, WordEntry};

/// Bundled word lists, one per JLPT level. Generated offline from JMdict-style
/// CSV data; each reading is hiragana-only and tokenizes to at least 2 units.
const BUILTIN_LISTS: [(JlptLevel, &str); 5] = [
    (JlptLevel::N5, include_str!("n5_words.json")),
    (JlptLevel::N4, include_str!("n4_words.json")),
    (JlptLevel::N3, include_str!("n3_words.json")),
    (JlptLevel::N2, include_str!("n2_words.json")),
    (JlptLevel::N1, include_str!("n1_words.json")),
];

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to parse word list for {level:?}: {source}")]
    Parse {
        level: JlptLevel,
        #[source]
        source: serde_json::Error,
    },
}

/// All word lists, keyed by level. Loaded once and cached; switching levels
/// only rebuilds lookup maps, never re-derives the lists.
#[derive(Debug, Clone)]
pub struct Lexicon {
    lists: BTreeMap<JlptLevel, Vec<WordEntry>>,
}

impl Lexicon {
    /// Build a lexicon from per-level entry lists. Levels not present are
    /// treated as empty.
    pub fn from_lists(lists: impl IntoIterator<Item = (JlptLevel, Vec<WordEntry>)>) -> Self {
        Self {
            lists: lists.into_iter().collect(),
        }
    }

    /// Parse the bundled JSON word lists.
    pub fn load_builtin() -> Result<Self, LexiconError> {
        let mut lists = BTreeMap::new();
        for (level, raw) in BUILTIN_LISTS {
            let entries: Vec<WordEntry> =
                serde_json::from_str(raw).map_err(|source| LexiconError::Parse { level, source })?;
            lists.insert(level, entries);
        }

        let total: usize = lists.values().map(Vec::len).sum();
        tracing::info!("Loaded {} words across {} JLPT levels", total, lists.len());

        Ok(Self { lists })
    }

    /// Shared, lazily parsed copy of the bundled lists.
    pub fn builtin() -> &'static Lexicon {
        static BUILTIN: Lazy<Lexicon> =
            Lazy::new(|| Lexicon::load_builtin().expect("bundled word lists are valid JSON"));
        &BUILTIN
    }

    /// Entries defined exactly at `level`.
    pub fn words_at(&self, level: JlptLevel) -> &[WordEntry] {
        self.lists.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entries from N5 up to and including `level`, tagged with the level
    /// that defines them.
    pub fn entries_up_to(
        &self,
        level: JlptLevel,
    ) -> impl Iterator<Item = (JlptLevel, &WordEntry)> {
        level
            .up_to()
            .flat_map(move |lvl| self.words_at(lvl).iter().map(move |entry| (lvl, entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lists_parse() {
        let lexicon = Lexicon::load_builtin().unwrap();
        for level in JlptLevel::ALL {
            assert!(
                !lexicon.words_at(level).is_empty(),
                "{:?} list is empty",
                level
            );
        }
    }

    #[test]
    fn test_entries_up_to_accumulates() {
        let lexicon = Lexicon::builtin();
        let n5_count = lexicon.entries_up_to(JlptLevel::N5).count();
        let n3_count = lexicon.entries_up_to(JlptLevel::N3).count();
        let n1_count = lexicon.entries_up_to(JlptLevel::N1).count();
        assert!(n5_count < n3_count);
        assert!(n3_count < n1_count);

        let total: usize = JlptLevel::ALL
            .iter()
            .map(|lvl| lexicon.words_at(*lvl).len())
            .sum();
        assert_eq!(n1_count, total);
    }

    #[test]
    fn test_all_readings_have_two_or_more_tokens() {
        let lexicon = Lexicon::builtin();
        for (_, entry) in lexicon.entries_up_to(JlptLevel::N1) {
            let tokens = crate::utils::kana::tokenize(&entry.hiragana);
            assert!(
                tokens.len() >= 2,
                "reading {} tokenizes to fewer than 2 units",
                entry.hiragana
            );
        }
    }
}
