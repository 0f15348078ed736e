//! Japanese bone name to English identifier.
//!
//! A name is split into base and side suffix, the base is translated online
//! when a client is configured (falling back to the token dictionary), the
//! result is reduced to identifier characters and the suffix is put back.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::TranslationCache;
use crate::dictionary::TokenDictionary;
use crate::error::TranslationError;
use crate::online::OnlineClient;
use crate::providers::{OpenAI, Provider};

pub const MIN_TIMEOUT_SECS: f64 = 0.1;
pub const MAX_TIMEOUT_SECS: f64 = 10.0;
pub const DEFAULT_TIMEOUT_SECS: f64 = 3.0;

const SIDE_SUFFIXES: [&str; 8] = [".L", ".R", "_L", "_R", ".l", ".r", "_l", "_r"];
const IDENTIFIER_PREFIX: &str = "bone_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Online,
    Cached,
    Dictionary,
    /// Nothing in the name could be translated.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transliteration {
    pub name: String,
    pub outcome: Outcome,
}

pub struct Transliterator<P: Provider = OpenAI> {
    dictionary: Arc<TokenDictionary>,
    cache: Arc<TranslationCache>,
    online: Option<OnlineClient<P>>,
    source_lang: String,
    target_lang: String,
}

impl Transliterator<OpenAI> {
    pub fn offline(dictionary: Arc<TokenDictionary>, cache: Arc<TranslationCache>) -> Self {
        Self::new(dictionary, cache, None)
    }
}

impl<P: Provider> Transliterator<P> {
    pub fn new(
        dictionary: Arc<TokenDictionary>,
        cache: Arc<TranslationCache>,
        online: Option<OnlineClient<P>>,
    ) -> Self {
        Self {
            dictionary,
            cache,
            online,
            source_lang: "ja".to_string(),
            target_lang: "en".to_string(),
        }
    }

    pub fn with_languages(mut self, source_lang: &str, target_lang: &str) -> Self {
        if !source_lang.trim().is_empty() {
            self.source_lang = source_lang.trim().to_string();
        }
        if !target_lang.trim().is_empty() {
            self.target_lang = target_lang.trim().to_string();
        }
        self
    }

    pub fn online_available(&self) -> bool {
        self.online.is_some()
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn dictionary(&self) -> &TokenDictionary {
        &self.dictionary
    }

    pub async fn translate_identifier(
        &self,
        name: &str,
        online_enabled: bool,
        timeout_secs: f64,
    ) -> String {
        self.translate_with_outcome(name, online_enabled, timeout_secs)
            .await
            .name
    }

    pub async fn translate_with_outcome(
        &self,
        name: &str,
        online_enabled: bool,
        timeout_secs: f64,
    ) -> Transliteration {
        let (base, suffix) = split_suffix(name);
        let original = sanitize(base);

        let online = if online_enabled && !base.is_empty() {
            self.translate_online(base, clamp_timeout(timeout_secs)).await
        } else {
            None
        };
        let (working, outcome) = match online {
            Some(found) => found,
            None => (self.dictionary.apply(base), Outcome::Dictionary),
        };

        let translated = sanitize(&working);
        if translated.is_empty() {
            return Transliteration {
                name: String::new(),
                outcome: Outcome::Unchanged,
            };
        }
        let outcome = if translated == original {
            Outcome::Unchanged
        } else {
            outcome
        };
        Transliteration {
            name: format!("{}{}", translated, suffix),
            outcome,
        }
    }

    async fn translate_online(&self, base: &str, timeout: Duration) -> Option<(String, Outcome)> {
        let Some(client) = self.online.as_ref() else {
            debug!("{}; using dictionary for {}", TranslationError::Unavailable, base);
            return None;
        };

        if let Some(text) = self.cache.get(base) {
            return Some((text, Outcome::Cached));
        }

        match client
            .translate(base, &self.source_lang, &self.target_lang, timeout)
            .await
        {
            Ok(text) => {
                let text = text.trim().to_lowercase();
                if text.is_empty() {
                    debug!("online: empty answer for {}", base);
                    return None;
                }
                debug!("online: {} -> {}", base, text);
                self.cache.set(base, text.clone());
                Some((text, Outcome::Online))
            }
            Err(err) => {
                warn!("{}; using dictionary for {}", err, base);
                None
            }
        }
    }
}

/// Splits a trailing left/right marker off `name`. The marker is only split
/// when something remains in front of it.
pub fn split_suffix(name: &str) -> (&str, &str) {
    for suffix in SIDE_SUFFIXES {
        if let Some(base) = name.strip_suffix(suffix)
            && !base.is_empty()
        {
            return (base, &name[base.len()..]);
        }
    }
    (name, "")
}

/// Reduces `text` to identifier characters. A result that does not start with
/// a letter gets the `bone_` prefix; an empty result stays empty.
pub fn sanitize(text: &str) -> String {
    let cleaned = text
        .chars()
        .map(fold_full_width)
        .filter(|ch| ch.is_alphanumeric() || matches!(ch, '.' | '_' | '-'))
        .collect::<String>();
    match cleaned.chars().next() {
        Some(first) if !first.is_alphabetic() => format!("{}{}", IDENTIFIER_PREFIX, cleaned),
        _ => cleaned,
    }
}

pub fn clamp_timeout(secs: f64) -> Duration {
    let secs = if secs.is_finite() {
        secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
    } else {
        DEFAULT_TIMEOUT_SECS
    };
    Duration::from_secs_f64(secs)
}

// U+FF01..=U+FF5E mirror printable ASCII
fn fold_full_width(ch: char) -> char {
    match ch {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch),
        _ => ch,
    }
}
