use async_trait::async_trait;

use crate::{
    domain::{ChatId, Member},
    Result,
};

/// Capabilities of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub supports_markdown: bool,
    pub max_message_len: usize,
}

/// Outbound messaging port.
///
/// Telegram is the first implementation; the shape is small enough that other
/// messengers can fit behind it with capability flags.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    fn capabilities(&self) -> MessagingCapabilities;

    async fn send_plain(&self, chat_id: ChatId, text: &str) -> Result<()>;
    async fn send_markdown(&self, chat_id: ChatId, text: &str) -> Result<()>;
}

/// Member lookup port.
///
/// The platform API only exposes administrators, not the full member list, so
/// this is the candidate pool for tagging.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    async fn administrators(&self, chat_id: ChatId) -> Result<Vec<Member>>;
}
