use crate::{error::Result, models::ModelProvider};
use std::env;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BEDROCK_MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BedrockConfig {
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub model_id: Option<String>,
    pub max_tokens: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct TitleConfig {
    pub provider: ModelProvider,
    pub ollama: Option<OllamaConfig>,
    pub openai: Option<OpenAiConfig>,
    pub bedrock: Option<BedrockConfig>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        OllamaConfig {
            base_url: None,
            model: None,
        }
    }
}

impl OllamaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        OllamaConfig {
            base_url: lookup("OLLAMA_BASE_URL"),
            model: lookup("OLLAMA_MODEL"),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            api_key: None,
            base_url: None,
            model: None,
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        OpenAiConfig {
            api_key: lookup("OPENAI_API_KEY"),
            base_url: lookup("OPENAI_BASE_URL"),
            model: lookup("OPENAI_MODEL"),
        }
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

impl Default for BedrockConfig {
    fn default() -> Self {
        BedrockConfig {
            region: None,
            access_key: None,
            secret_key: None,
            model_id: None,
            max_tokens: None,
        }
    }
}

impl BedrockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        BedrockConfig {
            region: lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")),
            access_key: lookup("AWS_ACCESS_KEY_ID"),
            secret_key: lookup("AWS_SECRET_ACCESS_KEY"),
            model_id: lookup("BEDROCK_MODEL_ID"),
            max_tokens: lookup("BEDROCK_MAX_TOKENS").and_then(|s| s.parse().ok()),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

impl Default for TitleConfig {
    fn default() -> Self {
        TitleConfig {
            provider: ModelProvider::Ollama,
            ollama: None,
            openai: None,
            bedrock: None,
        }
    }
}

impl TitleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `TITLE_PROVIDER` and the settings of the selected provider.
    /// An unknown provider name is a `ConfigError`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let provider = match lookup("TITLE_PROVIDER") {
            Some(name) => name.parse::<ModelProvider>()?,
            None => ModelProvider::default(),
        };

        let config = TitleConfig {
            provider,
            ..Default::default()
        };

        Ok(match provider {
            ModelProvider::Ollama => config.with_ollama(OllamaConfig::from_lookup(&lookup)),
            ModelProvider::OpenAi => config.with_openai(OpenAiConfig::from_lookup(&lookup)),
            ModelProvider::Bedrock => config.with_bedrock(BedrockConfig::from_lookup(&lookup)),
        })
    }

    pub fn with_ollama(mut self, config: OllamaConfig) -> Self {
        self.ollama = Some(config);
        self.provider = ModelProvider::Ollama;
        self
    }

    pub fn with_openai(mut self, config: OpenAiConfig) -> Self {
        self.openai = Some(config);
        self.provider = ModelProvider::OpenAi;
        self
    }

    pub fn with_bedrock(mut self, config: BedrockConfig) -> Self {
        self.bedrock = Some(config);
        self.provider = ModelProvider::Bedrock;
        self
    }
}
