use crate::error::{Result, TitleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Ollama,
    OpenAi,
    Bedrock,
}

impl ModelProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProvider::Ollama => "ollama",
            ModelProvider::OpenAi => "openai",
            ModelProvider::Bedrock => "bedrock",
        }
    }
}

impl Default for ModelProvider {
    fn default() -> Self {
        ModelProvider::Ollama
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = TitleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(ModelProvider::Ollama),
            "openai" | "open_ai" | "open-ai" => Ok(ModelProvider::OpenAi),
            "bedrock" | "aws" => Ok(ModelProvider::Bedrock),
            other => Err(TitleError::ConfigError(format!(
                "Unknown model provider: {}",
                other
            ))),
        }
    }
}
