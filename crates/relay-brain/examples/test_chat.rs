//! Send one message to the configured relay and print the reply.
//!
//! Run with: cargo run -p relay-brain --example test_chat
//! Or with a custom message: cargo run -p relay-brain --example test_chat -- "Your message here"
//!
//! Make sure to set environment variables in .env:
//!   RELAY_API_URL - Completion endpoint
//!   RELAY_API_KEY - Bearer credential (optional)

use relay_brain::{Brain, ChatMessage, CompletionRequest, ModelReply, RelayBrain};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Explain what a block explorer is in one sentence.".to_string()
    };

    let brain = RelayBrain::from_env()?;
    println!("Relay: {}", brain.config().api_url);
    if let Some(hash) = brain.system_prompt_hash() {
        println!("System prompt fingerprint: {}", hash);
    }
    println!("Sending: \"{}\"\n", message_text);

    let reply = brain
        .complete(CompletionRequest::new(vec![ChatMessage::user(message_text)]))
        .await?;

    match reply {
        ModelReply::Answer(text) => println!("=== Response ===\n{}\n================", text),
        ModelReply::PreferData => println!("(relay asked for live data instead)"),
        ModelReply::NoOpinion => println!("(relay returned no content)"),
    }

    Ok(())
}
