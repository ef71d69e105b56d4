pub mod bedrock;
pub mod ollama;
pub mod openai;

use crate::{
    config::TitleConfig,
    error::{Result, TitleError},
    models::{GenerationRequest, ModelProvider},
};
use async_trait::async_trait;
use std::sync::Arc;

pub use bedrock::BedrockTextClient;
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

/// Anything that can turn a prompt into generated text.
///
/// Sampling settings travel with each [`GenerationRequest`], so implementations
/// hold no per-call state and can be shared between concurrent callers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    fn model_id(&self) -> &str;
}

/// Builds the back-end selected by `config.provider`.
pub async fn connect(config: &TitleConfig) -> Result<Arc<dyn TextGenerator>> {
    let generator: Arc<dyn TextGenerator> = match config.provider {
        ModelProvider::Ollama => {
            let ollama = config.ollama.clone().unwrap_or_default();
            Arc::new(OllamaClient::new(ollama))
        }
        ModelProvider::OpenAi => {
            let openai = config
                .openai
                .clone()
                .ok_or_else(|| TitleError::ConfigError("OpenAI config required".into()))?;
            Arc::new(OpenAiClient::new(openai)?)
        }
        ModelProvider::Bedrock => {
            let bedrock = config
                .bedrock
                .clone()
                .ok_or_else(|| TitleError::ConfigError("Bedrock config required".into()))?;
            Arc::new(BedrockTextClient::new(bedrock).await?)
        }
    };

    log::info!(
        "Connected {} provider with model {}",
        config.provider,
        generator.model_id()
    );
    Ok(generator)
}

/// Reads the body of an HTTP response, turning non-2xx statuses into
/// [`TitleError::ProviderError`].
pub(crate) async fn read_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log::error!("Provider responded with {}: {}", status, body);
        return Err(TitleError::ProviderError {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
