use searchtitle::logger::{self, LogLevel, LoggerConfig};
use searchtitle::{connect, TitleConfig, TitleGenerator};
use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

const USAGE: &str = "Usage: searchtitle <query> [result | -]\n\
                     Reads the summarised result from stdin when it is omitted or '-'.";

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let level = env::var("TITLE_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LogLevel::Info);
    if let Err(e) = logger::init_with_config(LoggerConfig::new().with_level(level)) {
        eprintln!("{}", e);
    }

    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using system environment variables");
    }

    match run(env::args().skip(1).collect()).await {
        Ok(title) => {
            println!("{}", title);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<String>) -> Result<String, Box<dyn std::error::Error>> {
    let (query, result) = parse_args(&args).ok_or(USAGE)?;
    let result = match result {
        Some(result) => result,
        None => read_stdin()?,
    };

    let config = TitleConfig::from_env()?;
    logger::log_config_info(&config);

    let model = connect(&config).await?;
    let title = TitleGenerator::new(model)
        .generate_title(&query, &result)
        .await?;
    Ok(title)
}

/// Splits the command line into the query and an optional literal result.
/// A `None` result means it should be read from stdin.
fn parse_args(args: &[String]) -> Option<(String, Option<String>)> {
    match args {
        [query] => Some((query.clone(), None)),
        [query, result] if result == "-" => Some((query.clone(), None)),
        [query, result] => Some((query.clone(), Some(result.clone()))),
        _ => None,
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
