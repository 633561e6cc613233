use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*, update_listeners::webhooks};

use tracing::{info, warn};

use tagbot_core::{
    activation::InMemoryActivationStore,
    config::Config,
    ports::{MemberDirectory, MessagingPort},
    router::CommandRouter,
};

use crate::handlers;
use crate::TelegramMessenger;

pub struct AppState {
    pub cfg: Arc<Config>,
    pub router: CommandRouter,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Build the dispatcher and run it until shutdown.
///
/// With `WEBHOOK_URL` set, updates arrive over an HTTPS webhook served by the
/// built-in axum listener; otherwise the bot falls back to long polling. Both
/// paths feed the same handler chain, so the transport stays a single
/// collaborator.
pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    // Startup banner, best-effort: fails when the token is missing or wrong,
    // which is already reported at config time.
    match bot.get_me().await {
        Ok(me) => info!("tagbot started: @{}", me.username()),
        Err(e) => warn!("could not fetch bot identity: {e}"),
    }

    let messenger = Arc::new(TelegramMessenger::new(bot.clone(), cfg.request_timeout));
    let directory: Arc<dyn MemberDirectory> = messenger.clone();
    let router = CommandRouter::new(Arc::new(InMemoryActivationStore::new()), directory);

    let state = Arc::new(AppState {
        cfg: cfg.clone(),
        router,
        messenger: messenger.clone(),
    });

    let handler = Update::filter_message().endpoint(handlers::handle_message);
    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![state])
        .build();

    match &cfg.webhook_url {
        Some(raw_url) => {
            let addr = ([0, 0, 0, 0], cfg.webhook_port).into();
            let url: url::Url = raw_url
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid WEBHOOK_URL {raw_url}: {e}"))?;
            info!("listening for webhook updates on port {}", cfg.webhook_port);

            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("webhook listener error"),
                )
                .await;
        }
        None => {
            info!("long polling for updates");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}
