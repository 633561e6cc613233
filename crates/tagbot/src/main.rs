use std::sync::Arc;

use tagbot_core::config::Config;

use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tagbot_core::logging::init("tagbot");

    let cfg = Arc::new(Config::load()?);
    if !cfg.configured() {
        // Keep running so a misconfigured host is observable instead of
        // crash-looping; every Telegram call will fail until the token is set.
        error!("BOT_TOKEN is not set");
    }

    tagbot_telegram::run(cfg).await
}
