use std::sync::Arc;

use teloxide::prelude::*;

use tracing::warn;

use tagbot_core::{
    domain::{ChatId, ChatKind, Update as InboundUpdate},
    replies,
};

use crate::router::AppState;

/// Decode a Telegram message, hand it to the core router, and deliver the
/// reply. Always acknowledges the update; failures never propagate back to
/// the transport.
pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let update = InboundUpdate {
        chat_id: ChatId(msg.chat.id.0),
        chat_kind: chat_kind(&msg),
        text: text.to_string(),
        sender_name: sender_name(&msg),
    };

    let Some(reply) = state.router.handle(&update).await else {
        return Ok(());
    };

    let sent = if reply.markdown {
        state.messenger.send_markdown(update.chat_id, &reply.text).await
    } else {
        state.messenger.send_plain(update.chat_id, &reply.text).await
    };

    if let Err(e) = sent {
        warn!(chat_id = update.chat_id.0, "reply not delivered: {e}");
    }

    Ok(())
}

fn chat_kind(msg: &Message) -> ChatKind {
    if msg.chat.is_private() {
        ChatKind::Private
    } else if msg.chat.is_group() {
        ChatKind::Group
    } else if msg.chat.is_supergroup() {
        ChatKind::Supergroup
    } else {
        ChatKind::Channel
    }
}

fn sender_name(msg: &Message) -> String {
    msg.from()
        .map(|u| u.first_name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| replies::DEFAULT_MEMBER_NAME.to_string())
}
