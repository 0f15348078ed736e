use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

const BUILTIN_TOKENS: &str = include_str!("tokens.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenEntry {
    pub ja: String,
    pub en: String,
}

impl TokenEntry {
    pub fn new(ja: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            en: en.into(),
        }
    }

    fn len(&self) -> usize {
        self.ja.chars().count()
    }
}

/// Japanese fragment to English token table.
///
/// Entries are kept sorted by descending fragment length so that a compound
/// such as `親指` is replaced before its component `親`.
#[derive(Debug, Clone)]
pub struct TokenDictionary {
    entries: Vec<TokenEntry>,
}

#[derive(Debug, Deserialize)]
struct TokenFile {
    #[serde(default)]
    token: Vec<TokenEntry>,
}

impl TokenDictionary {
    pub fn load() -> Result<Self> {
        let parsed: TokenFile =
            toml::from_str(BUILTIN_TOKENS).with_context(|| "failed to parse token dictionary")?;
        Ok(Self::from_entries(parsed.token))
    }

    pub fn from_entries(entries: Vec<TokenEntry>) -> Self {
        let mut entries = entries
            .into_iter()
            .filter(|entry| !entry.ja.is_empty())
            .collect::<Vec<_>>();
        // stable: equal lengths keep declaration order
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.len()));
        Self { entries }
    }

    /// Adds user supplied fragments. A fragment already in the table takes the
    /// new English token.
    pub fn with_extra<I>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = self.entries;
        for (ja, en) in extra {
            if let Some(existing) = entries.iter_mut().find(|entry| entry.ja == ja) {
                existing.en = en;
            } else {
                entries.push(TokenEntry::new(ja, en));
            }
        }
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[TokenEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces every known fragment in `text`, longest fragments first. Each
    /// entry rewrites all of its occurrences in the string produced by the
    /// entries before it.
    pub fn apply(&self, text: &str) -> String {
        let mut working = text.to_string();
        for entry in &self.entries {
            if working.contains(&entry.ja) {
                working = working.replace(&entry.ja, &entry.en);
            }
        }
        if working != text {
            debug!("dictionary: {} -> {}", text, working);
        }
        working
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> TokenDictionary {
        TokenDictionary::load().expect("builtin dictionary")
    }

    #[test]
    fn builtin_entries_are_sorted_longest_first() {
        let dictionary = builtin();
        assert!(!dictionary.is_empty());
        let lengths = dictionary
            .entries()
            .iter()
            .map(TokenEntry::len)
            .collect::<Vec<_>>();
        assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(dictionary.entries()[0].ja.chars().count(), 6);
    }

    #[test]
    fn compounds_win_over_their_components() {
        let dictionary = builtin();
        assert_eq!(dictionary.apply("左親指"), "LeftThumb");
        assert_eq!(dictionary.apply("右手首"), "RightWrist");
        assert_eq!(dictionary.apply("足首"), "Ankle");
        assert_eq!(dictionary.apply("全ての親"), "ParentNode");
        assert_eq!(dictionary.apply("下あご"), "Chin");
        assert_eq!(dictionary.apply("上半身2"), "UpperBody2");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let dictionary = builtin();
        assert_eq!(dictionary.apply("左肩"), "LeftShoulder");
        assert_eq!(dictionary.apply("髪髪"), "HairHair");
        assert_eq!(dictionary.apply("後ろ髪"), "BehindHair");
    }

    #[test]
    fn declaration_order_does_not_change_the_result() {
        let forward = vec![
            TokenEntry::new("指", "Finger"),
            TokenEntry::new("人差指", "IndexFinger"),
            TokenEntry::new("左", "Left"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        let forward = TokenDictionary::from_entries(forward);
        let reversed = TokenDictionary::from_entries(reversed);
        for name in ["左人差指", "人差指", "左指"] {
            assert_eq!(forward.apply(name), reversed.apply(name), "{}", name);
        }
        assert_eq!(forward.apply("左人差指"), "LeftIndexFinger");
    }

    #[test]
    fn text_without_fragments_is_untouched() {
        let dictionary = builtin();
        assert_eq!(dictionary.apply("upper_arm.L"), "upper_arm.L");
    }

    #[test]
    fn extra_entries_extend_and_override() {
        let dictionary = builtin().with_extra(vec![
            ("髭".to_string(), "Beard".to_string()),
            ("根".to_string(), "Root".to_string()),
        ]);
        assert_eq!(dictionary.apply("髭"), "Beard");
        assert_eq!(dictionary.apply("髪根"), "HairRoot");
        assert_eq!(
            dictionary.entries().iter().filter(|entry| entry.ja == "根").count(),
            1
        );
    }
}
