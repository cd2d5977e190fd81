//! Ask the assistant questions from the terminal.
//!
//! Run with: cargo run -p orchestrator --example ask -- "What's the current gas price?"
//!
//! With no arguments, reads one question per line from stdin.
//!
//! Configuration via .env file or environment variables:
//!   RELAY_API_URL      - Model backend endpoint (required)
//!   EXPLORER_API_KEY   - Block explorer API key
//!   ASSISTANT_ANALYZE_WITH_MODEL - Set to false to print raw explorer data

use std::env;
use std::io::{self, BufRead};

use brain_core::ChatMessage;
use orchestrator::Orchestrator;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orchestrator=info".parse()?),
        )
        .init();

    let assistant = Orchestrator::from_env().await?;

    let question: Vec<String> = env::args().skip(1).collect();
    if !question.is_empty() {
        let reply = assistant
            .answer(&[ChatMessage::user(question.join(" "))])
            .await;
        println!("{}", reply);
        return Ok(());
    }

    info!("Reading questions from stdin");
    let mut conversation = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        conversation.push(ChatMessage::user(line));
        let reply = assistant.answer(&conversation).await;
        println!("{}\n", reply);
        conversation.push(ChatMessage::assistant(reply));
    }

    Ok(())
}
