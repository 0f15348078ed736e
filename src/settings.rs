use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::formats::{self, Format};
use crate::transliterate::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};

const DEFAULT_SETTINGS_TOML: &str = include_str!("../settings.toml");

#[derive(Debug, Clone)]
pub struct Settings {
    pub source_format: Format,
    pub target_format: Format,
    pub include_fingers: bool,
    pub online: bool,
    pub timeout_secs: f64,
    pub source_lang: String,
    pub target_lang: String,
    pub model: Option<String>,
    pub key: Option<String>,
    pub concurrency: usize,
    pub extra_tokens: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_format: Format::MmdEnglish,
            target_format: Format::BlenderRigify,
            include_fingers: true,
            online: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            source_lang: "ja".to_string(),
            target_lang: "en".to_string(),
            model: None,
            key: None,
            concurrency: 4,
            extra_tokens: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    rename: Option<RenameSettings>,
    translation: Option<TranslationSettings>,
    dictionary: Option<DictionarySettings>,
}

#[derive(Debug, Default, Deserialize)]
struct RenameSettings {
    source_format: Option<String>,
    target_format: Option<String>,
    include_fingers: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct TranslationSettings {
    online: Option<bool>,
    timeout: Option<f64>,
    source_lang: Option<String>,
    target_lang: Option<String>,
    model: Option<String>,
    key: Option<String>,
    concurrency: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct DictionarySettings {
    extra: Option<BTreeMap<String, String>>,
}

/// Loads settings in increasing priority: built-in defaults, `./settings.toml`,
/// `./settings.local.toml`, the same two files under `~/.bone-renamer/`, and
/// finally `extra_path`.
pub fn load_settings(extra_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();
    ensure_home_settings_file()?;

    let mut ordered_paths = Vec::new();
    ordered_paths.push(PathBuf::from("settings.toml"));
    ordered_paths.push(PathBuf::from("settings.local.toml"));

    if let Some(home) = home_dir() {
        ordered_paths.push(home.join("settings.toml"));
        ordered_paths.push(home.join("settings.local.toml"));
    }

    if let Some(extra) = extra_path {
        if !extra.exists() {
            return Err(anyhow!("settings file not found: {}", extra.display()));
        }
        ordered_paths.push(extra.to_path_buf());
    }

    for path in ordered_paths {
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings: {}", path.display()))?;
            settings
                .merge_str(&content)
                .with_context(|| format!("failed to parse settings: {}", path.display()))?;
        }
    }

    Ok(settings)
}

impl Settings {
    fn merge_str(&mut self, content: &str) -> Result<()> {
        let parsed: SettingsFile = toml::from_str(content)?;
        self.merge(parsed)
    }

    fn merge(&mut self, incoming: SettingsFile) -> Result<()> {
        if let Some(rename) = incoming.rename {
            if let Some(key) = rename.source_format {
                self.source_format = formats::resolve(key.trim())?;
            }
            if let Some(key) = rename.target_format {
                self.target_format = formats::resolve(key.trim())?;
            }
            if let Some(include) = rename.include_fingers {
                self.include_fingers = include;
            }
        }
        if let Some(translation) = incoming.translation {
            if let Some(online) = translation.online {
                self.online = online;
            }
            if let Some(timeout) = translation.timeout {
                self.timeout_secs = bounded_timeout(timeout);
            }
            if let Some(lang) = translation.source_lang {
                if !lang.trim().is_empty() {
                    self.source_lang = lang.trim().to_string();
                }
            }
            if let Some(lang) = translation.target_lang {
                if !lang.trim().is_empty() {
                    self.target_lang = lang.trim().to_string();
                }
            }
            if let Some(model) = translation.model {
                if !model.trim().is_empty() {
                    self.model = Some(model.trim().to_string());
                }
            }
            if let Some(key) = translation.key {
                if !key.trim().is_empty() {
                    self.key = Some(key.trim().to_string());
                }
            }
            if let Some(concurrency) = translation.concurrency {
                if concurrency > 0 {
                    self.concurrency = concurrency;
                }
            }
        }
        if let Some(dictionary) = incoming.dictionary {
            if let Some(extra) = dictionary.extra {
                for (ja, en) in extra {
                    if !ja.is_empty() {
                        self.extra_tokens.insert(ja, en);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Keeps a configured timeout inside the supported range.
pub fn bounded_timeout(secs: f64) -> f64 {
    if !secs.is_finite() {
        warn!("invalid timeout {}; using {}s", secs, DEFAULT_TIMEOUT_SECS);
        return DEFAULT_TIMEOUT_SECS;
    }
    let bounded = secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
    if bounded != secs {
        warn!(
            "timeout {}s outside {}..={}s; using {}s",
            secs, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, bounded
        );
    }
    bounded
}

fn ensure_home_settings_file() -> Result<()> {
    let Some(home) = home_dir() else {
        return Ok(());
    };
    fs::create_dir_all(&home)
        .with_context(|| format!("failed to create settings directory: {}", home.display()))?;
    let path = home.join("settings.toml");
    if !path.exists() {
        fs::write(&path, DEFAULT_SETTINGS_TOML)
            .with_context(|| format!("failed to write settings: {}", path.display()))?;
    }
    Ok(())
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().and_then(|home| {
        let home = home.trim();
        if home.is_empty() {
            None
        } else {
            Some(Path::new(home).join(".bone-renamer"))
        }
    })
}
