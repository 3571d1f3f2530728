//! Q&A chat front-end server
//!
//! Entry point: loads configuration, sets up logging and serves the pages.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use qa_chat_ui::config::AppConfig;
use qa_chat_ui::{server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init(config.log.format);

    info!(
        name: "config.loaded",
        address = %config.bind_addr(),
        use_login = config.auth.use_login,
        static_dir = %config.ui.static_dir.display(),
        "Configuration loaded"
    );

    server::start_server(Arc::new(config)).await?;
    Ok(())
}
