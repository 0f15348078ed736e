use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::{Value, json};
use tera::{Context as TeraContext, Tera};

use crate::providers::ToolSpec;

pub const TOOL_NAME: &str = "deliver_bone_name";

const SYSTEM_PROMPT_TEMPLATE: &str = include_str!("prompts/system_prompt.tera");

#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub source_lang: String,
    pub lang: String,
}

pub fn tool_spec(tool_name: &str) -> ToolSpec {
    let parameters = json!({
        "type": "object",
        "properties": {
            "translation": {"type": "string"},
            "source_language": {"type": "string"},
            "target_language": {"type": "string"}
        },
        "required": ["translation", "source_language", "target_language"]
    });

    ToolSpec {
        name: tool_name.to_string(),
        description: "Return the translated bone name.".to_string(),
        parameters,
    }
}

pub fn render_system_prompt(options: &TranslateOptions, tool_name: &str) -> Result<String> {
    let mut context = TeraContext::new();
    context.insert("source_lang", options.source_lang.trim());
    context.insert("target_lang", options.lang.trim());
    context.insert("tool_name", tool_name);

    Tera::one_off(SYSTEM_PROMPT_TEMPLATE, &context, false)
        .with_context(|| "failed to render system prompt")
}

/// Extracts the translated text from the tool arguments, rejecting answers
/// for a different language pair.
pub fn parse_tool_args(value: Value, options: &TranslateOptions) -> Result<String> {
    let args: ToolArgs =
        serde_json::from_value(value).with_context(|| "malformed tool arguments")?;
    let translation = args.translation.trim();
    if translation.is_empty() {
        return Err(anyhow!("translation is empty"));
    }
    if !eq_insensitive(&args.target_language, &options.lang) {
        return Err(anyhow!(
            "tool response target_language mismatch (expected '{}', got '{}')",
            options.lang,
            args.target_language
        ));
    }
    if !args.source_language.trim().is_empty()
        && !eq_insensitive(&args.source_language, &options.source_lang)
    {
        return Err(anyhow!(
            "tool response source_language mismatch (expected '{}', got '{}')",
            options.source_lang,
            args.source_language
        ));
    }
    Ok(translation.to_string())
}

#[derive(Debug, Deserialize)]
struct ToolArgs {
    translation: String,
    #[serde(default)]
    source_language: String,
    target_language: String,
}

fn eq_insensitive(left: &str, right: &str) -> bool {
    left.trim().eq_ignore_ascii_case(right.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> TranslateOptions {
        TranslateOptions {
            source_lang: "ja".to_string(),
            lang: "en".to_string(),
        }
    }

    #[test]
    fn accepts_matching_language_pair() {
        let value = json!({
            "translation": "  left shoulder ",
            "source_language": "JA",
            "target_language": "en"
        });
        assert_eq!(
            parse_tool_args(value, &options()).expect("valid args"),
            "left shoulder"
        );
    }

    #[test]
    fn rejects_empty_translation() {
        let value = json!({
            "translation": " ",
            "source_language": "ja",
            "target_language": "en"
        });
        assert!(parse_tool_args(value, &options()).is_err());
    }

    #[test]
    fn rejects_wrong_target_language() {
        let value = json!({
            "translation": "épaule",
            "source_language": "ja",
            "target_language": "fr"
        });
        let err = parse_tool_args(value, &options()).unwrap_err();
        assert!(err.to_string().contains("target_language mismatch"));
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!(parse_tool_args(json!({"text": "arm"}), &options()).is_err());
    }

    #[test]
    fn prompt_names_the_tool_and_languages() {
        let prompt = render_system_prompt(&options(), TOOL_NAME).expect("prompt");
        assert!(prompt.contains("from ja to en"));
        assert!(prompt.contains(TOOL_NAME));
        assert!(!prompt.contains("{{"));
    }
}
