//! Create or update a settings file
//!
//! ```text
//! cargo run --example configure -- gemini AIza... gemini-2.5-flash
//! ```

use quill::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let provider: ProviderKind = args.next().unwrap_or_else(|| "openai".into()).parse()?;

    let path = std::env::var("QUILL_SETTINGS").unwrap_or_else(|_| "quill-settings.json".into());
    let store = SettingsStore::new(&path);
    let mut settings = store.load().await;

    settings.set_active(provider);
    let config = settings.config_mut(provider);
    if let Some(key) = args.next() {
        config.api_key = key;
    }
    if let Some(model) = args.next() {
        config.model = model;
    }

    store.save(&settings).await?;

    println!("Saved {}", store.path().display());
    println!("Active provider: {}", provider.display_name());
    for kind in [ProviderKind::OpenAI, ProviderKind::Gemini] {
        let config = settings.config(kind);
        println!(
            "  {:<8} model={} key={}",
            kind.display_name(),
            config.model,
            if config.has_api_key() { "set" } else { "missing" }
        );
    }

    Ok(())
}
