use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

pub mod cache;
pub mod dictionary;
pub mod error;
pub mod formats;
pub mod host;
pub mod logging;
pub mod mapping;
pub mod online;
pub mod providers;
pub mod rename;
pub mod settings;
mod test_util;
pub mod translations;
pub mod transliterate;

pub use cache::TranslationCache;
pub use dictionary::TokenDictionary;
pub use error::{FormatError, HostError, TranslationError};
pub use formats::Format;
pub use host::{BoneHost, BoneSet, RenameReport, TranslationReport};
pub use online::OnlineClient;
pub use rename::{RenamePair, compute_renames};
pub use transliterate::{Outcome, Transliteration, Transliterator};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub from: Option<String>,
    pub to: Option<String>,
    pub no_fingers: bool,
    pub translate: bool,
    pub online: bool,
    pub timeout: Option<f64>,
    pub key: Option<String>,
    pub model: Option<String>,
    pub settings_path: Option<String>,
    pub show_formats: bool,
}

pub async fn run(config: Config, input: Option<String>) -> Result<String> {
    let settings_path = config.settings_path.as_deref().map(Path::new);
    let settings = settings::load_settings(settings_path)?;

    if config.show_formats {
        return Ok(format_formats());
    }

    let input = input.unwrap_or_default();
    let bones = parse_bone_list(&input);
    if bones.is_empty() {
        return Err(anyhow!("stdin is empty"));
    }
    let mut rig = BoneSet::new(bones);

    if config.translate {
        run_translate(&config, &settings, &mut rig).await
    } else {
        run_rename(&config, &settings, &mut rig)
    }
}

pub fn format_formats() -> String {
    Format::ALL
        .iter()
        .map(|format| format!("{}\t{}", format.key(), format.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn run_rename(config: &Config, settings: &settings::Settings, rig: &mut BoneSet) -> Result<String> {
    let source = match config.from.as_deref() {
        Some(key) => formats::resolve(key.trim())?,
        None => settings.source_format,
    };
    let target = match config.to.as_deref() {
        Some(key) => formats::resolve(key.trim())?,
        None => settings.target_format,
    };
    let include_fingers = settings.include_fingers && !config.no_fingers;

    let pairs = rename::renames_between(&rig.identifier_set(), source, target, include_fingers);
    let report = host::apply_renames(rig, &pairs);
    info!(
        "{} -> {}: renamed {}, skipped {}",
        source,
        target,
        report.renamed.len(),
        report.skipped
    );
    Ok(format_rename_output(&report))
}

async fn run_translate(
    config: &Config,
    settings: &settings::Settings,
    rig: &mut BoneSet,
) -> Result<String> {
    let dictionary = TokenDictionary::load()?.with_extra(settings.extra_tokens.clone());
    let online_enabled = config.online || settings.online;
    let client = if online_enabled {
        let key = config.key.as_deref().or(settings.key.as_deref());
        let model = config.model.as_deref().or(settings.model.as_deref());
        match OnlineClient::connect(key, model) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!("{}; translating with the dictionary only", err);
                None
            }
        }
    } else {
        None
    };
    let timeout_secs = config
        .timeout
        .map(settings::bounded_timeout)
        .unwrap_or(settings.timeout_secs);

    let transliterator = Transliterator::new(
        Arc::new(dictionary),
        Arc::new(TranslationCache::new()),
        client,
    )
    .with_languages(&settings.source_lang, &settings.target_lang);
    info!(
        "translating with {} dictionary tokens, online {}",
        transliterator.dictionary().len(),
        if transliterator.online_available() { "on" } else { "off" }
    );

    let translation = host::translate_bones(
        &transliterator,
        &rig.identifiers(),
        online_enabled,
        timeout_secs,
        settings.concurrency,
    )
    .await;
    let applied = host::apply_renames(rig, &translation.pairs);
    Ok(format_translate_output(&translation, &applied))
}

fn parse_bone_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn format_pairs(pairs: &[RenamePair]) -> Vec<String> {
    pairs
        .iter()
        .map(|pair| format!("{}\t{}", pair.old, pair.new))
        .collect()
}

fn format_rename_output(report: &RenameReport) -> String {
    let mut lines = format_pairs(&report.renamed);
    lines.push(format!(
        "summary: renamed={}, skipped={}",
        report.renamed.len(),
        report.skipped
    ));
    lines.join("\n")
}

fn format_translate_output(translation: &TranslationReport, applied: &RenameReport) -> String {
    let mut lines = format_pairs(&applied.renamed);
    lines.push(format!(
        "summary: translated={}, online={}, cached={}, dictionary={}, skipped={}",
        applied.renamed.len(),
        translation.online,
        translation.cached,
        translation.dictionary,
        translation.skipped + applied.skipped
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn bone_list_ignores_blank_lines_and_comments() {
        let bones = parse_bone_list("# exported bones\nneck\n\n  arm_L  \n");
        assert_eq!(bones, vec!["neck".to_string(), "arm_L".to_string()]);
    }

    #[test]
    fn rename_uses_settings_unless_overridden() {
        let settings = Settings::default();
        let mut rig = BoneSet::new(["neck", "arm_L", "thumb1_L"]);
        let output = run_rename(&Config::default(), &settings, &mut rig).expect("rename");
        assert_eq!(
            output,
            "arm_L\tupper_arm.L\nthumb1_L\tthumb.02.L\nsummary: renamed=2, skipped=0"
        );

        let config = Config {
            from: Some(" blender_rigify ".to_string()),
            to: Some("mmd_english".to_string()),
            no_fingers: true,
            ..Config::default()
        };
        let output = run_rename(&config, &settings, &mut rig).expect("rename back");
        assert_eq!(output, "upper_arm.L\tarm_L\nsummary: renamed=1, skipped=0");
    }

    #[test]
    fn unknown_format_flag_is_an_error() {
        let config = Config {
            to: Some("maya".to_string()),
            ..Config::default()
        };
        let mut rig = BoneSet::new(["neck"]);
        let err = run_rename(&config, &Settings::default(), &mut rig).unwrap_err();
        assert_eq!(err.to_string(), "unknown bone format 'maya'");
    }

    #[tokio::test]
    async fn translate_applies_dictionary_results() {
        let mut settings = Settings::default();
        settings
            .extra_tokens
            .insert("髭".to_string(), "Beard".to_string());
        let config = Config {
            translate: true,
            ..Config::default()
        };
        let mut rig = BoneSet::new(["左肩", "肩.L", "髭", "neck", "左肩_"]);
        let output = run_translate(&config, &settings, &mut rig)
            .await
            .expect("translate");
        assert_eq!(
            output,
            "左肩\tLeftShoulder\n肩.L\tShoulder.L\n髭\tBeard\n左肩_\tLeftShoulder_\n\
             summary: translated=4, online=0, cached=0, dictionary=4, skipped=1"
        );
    }
}
