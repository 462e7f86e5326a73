//! Stream a prompt to stdout using the saved settings
//!
//! ```text
//! OPENAI_API_KEY=sk-... cargo run --example stream_to_stdout -- "Tell me a joke"
//! ```
//!
//! Set `QUILL_SETTINGS` to point at a settings file written by the
//! `configure` example; an API key in the environment overrides the file.

use quill::prelude::*;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Write a haiku about rivers".to_string());

    let path = std::env::var("QUILL_SETTINGS").unwrap_or_else(|_| "quill-settings.json".into());
    let mut settings = SettingsStore::new(path).load().await;

    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        settings.openai.api_key = key;
    }
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        settings.gemini.api_key = key;
        if std::env::var("OPENAI_API_KEY").is_err() {
            settings.set_active(ProviderKind::Gemini);
        }
    }

    let request = settings.request(prompt)?;
    println!("Streaming from {} ({})...", request.provider.display_name(), request.config.model);

    let client = Client::new()?;
    let mut handle = client.spawn(request);
    let mut stdout = std::io::stdout();

    while let Some(event) = handle.recv().await {
        match event {
            StreamEvent::Text(text) => {
                write!(stdout, "{}", text)?;
                stdout.flush()?;
            }
            StreamEvent::Error(message) => {
                eprintln!("\nError: {}", message);
                std::process::exit(1);
            }
            StreamEvent::Done => println!(),
        }
    }

    Ok(())
}
