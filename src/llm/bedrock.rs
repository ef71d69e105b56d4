use crate::{
    config::{BedrockConfig, DEFAULT_BEDROCK_MODEL},
    error::{Result, TitleError},
    llm::TextGenerator,
    models::GenerationRequest,
};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{error::ProvideErrorMetadata, primitives::Blob, Client};
use serde_json::{json, Value};

const DEFAULT_MAX_TOKENS: i32 = 512;

/// Geography prefixes of cross-region inference profile ids, e.g. `us.anthropic.claude-...`.
const INFERENCE_PROFILE_PREFIXES: [&str; 5] = ["us.", "eu.", "apac.", "us-gov.", "global."];

/// Request/response dialect of a Bedrock model, picked from its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Titan,
    Claude,
    Llama,
    Mistral,
    Cohere,
    Ai21,
}

impl ModelFamily {
    pub fn from_model_id(model_id: &str) -> Result<Self> {
        let base_id = INFERENCE_PROFILE_PREFIXES
            .iter()
            .find_map(|prefix| model_id.strip_prefix(prefix))
            .unwrap_or(model_id);

        match base_id {
            id if id.starts_with("amazon.titan") => Ok(ModelFamily::Titan),
            // application inference profiles are assumed to front a Claude model
            id if id.starts_with("anthropic.claude") || id.starts_with("arn:aws:bedrock") => {
                Ok(ModelFamily::Claude)
            }
            id if id.starts_with("meta.llama") => Ok(ModelFamily::Llama),
            id if id.starts_with("mistral.") => Ok(ModelFamily::Mistral),
            id if id.starts_with("cohere.command") => Ok(ModelFamily::Cohere),
            id if id.starts_with("ai21.") => Ok(ModelFamily::Ai21),
            _ => Err(TitleError::ConfigError(format!(
                "Unsupported model ID: {}",
                model_id
            ))),
        }
    }

    fn build_payload(&self, request: &GenerationRequest, max_tokens: i32) -> Value {
        match self {
            ModelFamily::Titan => json!({
                "inputText": request.prompt,
                "textGenerationConfig": {
                    "maxTokenCount": max_tokens,
                    "temperature": request.temperature
                }
            }),
            ModelFamily::Claude => json!({
                "messages": [
                    {
                        "role": "user",
                        "content": request.prompt
                    }
                ],
                "max_tokens": max_tokens,
                "temperature": request.temperature,
                "anthropic_version": "bedrock-2023-05-31"
            }),
            ModelFamily::Llama => json!({
                "prompt": request.prompt,
                "max_gen_len": max_tokens,
                "temperature": request.temperature
            }),
            ModelFamily::Mistral | ModelFamily::Cohere => json!({
                "prompt": request.prompt,
                "max_tokens": max_tokens,
                "temperature": request.temperature
            }),
            ModelFamily::Ai21 => json!({
                "prompt": request.prompt,
                "maxTokens": max_tokens,
                "temperature": request.temperature
            }),
        }
    }

    fn extract_text(&self, json: &Value) -> Option<String> {
        let text = match self {
            ModelFamily::Titan => &json["results"][0]["outputText"],
            ModelFamily::Claude => &json["content"][0]["text"],
            ModelFamily::Llama => &json["generation"],
            ModelFamily::Mistral => &json["outputs"][0]["text"],
            ModelFamily::Cohere => &json["generations"][0]["text"],
            ModelFamily::Ai21 => &json["completions"][0]["data"]["text"],
        };
        text.as_str().map(String::from)
    }
}

#[derive(Clone)]
pub struct BedrockTextClient {
    client: Client,
    model_id: String,
    family: ModelFamily,
    max_tokens: i32,
}

impl BedrockTextClient {
    pub async fn new(config: BedrockConfig) -> Result<Self> {
        let model_id = config
            .model_id
            .clone()
            .unwrap_or_else(|| DEFAULT_BEDROCK_MODEL.to_string());
        let family = ModelFamily::from_model_id(&model_id)?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let (Some(access_key), Some(secret_key)) = (&config.access_key, &config.secret_key) {
            loader = loader.credentials_provider(aws_sdk_bedrockruntime::config::Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                "searchtitle",
            ));
        }
        if let Some(region) = config.region.clone() {
            loader = loader.region(aws_sdk_bedrockruntime::config::Region::new(region));
        }
        let aws_config = loader.load().await;

        Ok(Self::with_client(
            Client::new(&aws_config),
            model_id,
            family,
            config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        ))
    }

    pub fn with_client(client: Client, model_id: String, family: ModelFamily, max_tokens: i32) -> Self {
        Self {
            client,
            model_id,
            family,
            max_tokens,
        }
    }

    fn parse_response(&self, body: &[u8]) -> Result<String> {
        let json: Value = serde_json::from_slice(body)?;
        self.family.extract_text(&json).ok_or_else(|| {
            TitleError::ResponseError(format!(
                "No generated text in {:?} response from {}",
                self.family, self.model_id
            ))
        })
    }
}

#[async_trait]
impl TextGenerator for BedrockTextClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let payload = self.family.build_payload(request, self.max_tokens);
        let request_json = serde_json::to_string(&payload)?;

        log::info!("Invoking Bedrock model: {}", self.model_id);
        log::debug!("Bedrock request payload: {}", request_json);

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(request_json.into_bytes()))
            .send()
            .await
            .map_err(|e| {
                log::error!("Bedrock InvokeModel error details: {:?}", e);

                if let Some(service_error) = e.as_service_error() {
                    TitleError::AwsServiceError(format!(
                        "Bedrock service error: {} - {}",
                        service_error.code().unwrap_or("unknown"),
                        service_error.message().unwrap_or("no message")
                    ))
                } else {
                    TitleError::AwsError(format!("AWS SDK error: {}", e))
                }
            })?;

        self.parse_response(response.body.as_ref())
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
