use std::time::Duration;
use tracing::debug;

use crate::error::TranslationError;
use crate::providers::{self, OpenAI, Provider};
use crate::translations::{self, TOOL_NAME, TranslateOptions};

/// Thin client for an LLM that translates one bone name per call.
#[derive(Debug, Clone)]
pub struct OnlineClient<P: Provider> {
    provider: P,
}

impl OnlineClient<OpenAI> {
    /// Resolves the online capability once: without an API key there is no
    /// client and every lookup goes to the dictionary.
    pub fn connect(key: Option<&str>, model: Option<&str>) -> Result<Self, TranslationError> {
        let key = providers::resolve_key(key).ok_or(TranslationError::Unavailable)?;
        let mut provider = OpenAI::new(key);
        if let Some(model) = model {
            provider = provider.with_model(model);
        }
        debug!("online translation enabled (model {})", provider.model());
        Ok(Self::new(provider))
    }
}

impl<P: Provider> OnlineClient<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        timeout: Duration,
    ) -> Result<String, TranslationError> {
        let options = TranslateOptions {
            source_lang: source_lang.to_string(),
            lang: target_lang.to_string(),
        };
        let system_prompt = translations::render_system_prompt(&options, TOOL_NAME)
            .map_err(|err| TranslationError::Failed(format!("{:#}", err)))?;

        let call = self
            .provider
            .clone()
            .register_tool(translations::tool_spec(TOOL_NAME))
            .append_system_input(system_prompt)
            .append_user_input(text.to_string())
            .call_tool(TOOL_NAME);

        let response = match tokio::time::timeout(timeout, call).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(TranslationError::Failed(format!("{:#}", err))),
            Err(_) => return Err(TranslationError::Timeout(timeout)),
        };
        if let Some(usage) = response.usage.as_ref() {
            debug!(
                "{} -> model {} used {} tokens",
                text,
                response.model.as_deref().unwrap_or("unavailable"),
                usage.total_tokens.unwrap_or(0)
            );
        }
        translations::parse_tool_args(response.args, &options)
            .map_err(|err| TranslationError::Failed(format!("{:#}", err)))
    }
}
