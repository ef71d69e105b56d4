//! Titles for web searches and their summarised results.
//!
//! A title is produced by rendering a fixed few-shot prompt around the query and
//! the result, sending it to a [`TextGenerator`] at temperature zero, and
//! returning whatever text comes back.
//!
//! ```no_run
//! use searchtitle::{connect, TitleConfig, TitleGenerator};
//!
//! # async fn run() -> searchtitle::Result<()> {
//! let model = connect(&TitleConfig::from_env()?).await?;
//! let title = TitleGenerator::new(model)
//!     .generate_title("What is SvelteKit?", "SvelteKit is an application framework...")
//!     .await?;
//! println!("{}", title);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod llm;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod title;

pub use config::{BedrockConfig, OllamaConfig, OpenAiConfig, TitleConfig};
pub use error::{Result, TitleError};
pub use llm::{connect, BedrockTextClient, OllamaClient, OpenAiClient, TextGenerator};
pub use models::{GenerationRequest, ModelProvider};
pub use prompt::render_title_prompt;
pub use title::{build_title_request, generate_title, TitleGenerator, TITLE_TEMPERATURE};
