use searchtitle::{OllamaClient, OllamaConfig, TitleGenerator};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    searchtitle::logger::init_with_config(searchtitle::logger::LoggerConfig::development())?;

    let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string());
    let client = OllamaClient::new(OllamaConfig::from_env().with_model(model));
    let generator = TitleGenerator::new(Arc::new(client));

    let title = generator
        .generate_title(
            "What is the borrow checker?",
            "The borrow checker is the part of the Rust compiler that enforces ownership \
             rules: each value has one owner, and references may be shared or mutable but \
             never both at once [1]. It prevents data races and use-after-free at compile time [2].",
        )
        .await?;
    println!("{}", title);

    let title = generator
        .generate_title("tokio vs async-std", "")
        .await?;
    println!("{}", title);

    Ok(())
}
