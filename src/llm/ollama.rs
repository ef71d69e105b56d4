use crate::{
    config::{OllamaConfig, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL},
    error::{Result, TitleError},
    llm::{read_body, TextGenerator},
    models::GenerationRequest,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: Option<OllamaMessage>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}

/// Chat client for a local or remote Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());

        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config
                .model
                .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
        }
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
            "stream": false,
            "options": {
                "temperature": request.temperature
            }
        })
    }

    fn parse_response(body: &str) -> Result<String> {
        let response: OllamaChatResponse = serde_json::from_str(body)?;

        if let Some(error) = response.error {
            return Err(TitleError::ResponseError(format!("Ollama error: {}", error)));
        }

        response
            .message
            .map(|message| message.content)
            .ok_or_else(|| TitleError::ResponseError("Ollama response has no message".into()))
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let payload = self.build_payload(request);

        log::info!("Invoking Ollama model: {}", self.model);
        log::debug!("Ollama request payload: {}", payload);

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| TitleError::RequestError(format!("Ollama request failed: {}", e)))?;

        let body = read_body(response).await?;
        Self::parse_response(&body)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
