use crate::{
    config::{OpenAiConfig, DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_URL},
    error::{Result, TitleError},
    llm::{read_body, TextGenerator},
    models::GenerationRequest,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Client for the OpenAI chat completions API, or any server that mimics it.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TitleError::ConfigError("OpenAI API key is required".into()))?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string());

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config
                .model
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        })
    }

    fn build_payload(&self, request: &GenerationRequest) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": request.prompt
                }
            ],
            "temperature": request.temperature
        })
    }

    fn parse_response(body: &str) -> Result<String> {
        let response: ChatCompletionResponse = serde_json::from_str(body)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                TitleError::ResponseError("OpenAI response has no message content".into())
            })
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let payload = self.build_payload(request);

        log::info!("Invoking OpenAI model: {}", self.model);
        log::debug!("OpenAI request payload: {}", payload);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TitleError::RequestError(format!("OpenAI request failed: {}", e)))?;

        let body = read_body(response).await?;
        Self::parse_response(&body)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
