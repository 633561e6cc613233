//! Telegram adapter (teloxide).
//!
//! This crate implements the `tagbot-core` messaging and member-directory
//! ports over the Telegram Bot API.

use std::time::Duration;

use async_trait::async_trait;

use teloxide::{prelude::*, types::ParseMode};

use tokio::time::timeout;

pub mod handlers;
pub mod router;

use tagbot_core::{
    domain::{ChatId, Member},
    errors::Error,
    ports::{MemberDirectory, MessagingCapabilities, MessagingPort},
    Result,
};

pub use router::run;

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
    request_timeout: Duration,
}

impl TelegramMessenger {
    pub fn new(bot: Bot, request_timeout: Duration) -> Self {
        Self {
            bot,
            request_timeout,
        }
    }

    pub fn bot(&self) -> Bot {
        self.bot.clone()
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    fn capabilities(&self) -> MessagingCapabilities {
        MessagingCapabilities {
            supports_markdown: true,
            max_message_len: 4096,
        }
    }

    async fn send_plain(&self, chat_id: ChatId, text: &str) -> Result<()> {
        let req = self.bot.send_message(Self::tg_chat(chat_id), text.to_string());
        match timeout(self.request_timeout, req.send()).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(Error::Send(format!("telegram error: {e}"))),
            Err(_) => Err(Error::Send("telegram send timed out".to_string())),
        }
    }

    async fn send_markdown(&self, chat_id: ChatId, text: &str) -> Result<()> {
        let req = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .parse_mode(ParseMode::Markdown);
        match timeout(self.request_timeout, req.send()).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(Error::Send(format!("telegram error: {e}"))),
            Err(_) => Err(Error::Send("telegram send timed out".to_string())),
        }
    }
}

#[async_trait]
impl MemberDirectory for TelegramMessenger {
    async fn administrators(&self, chat_id: ChatId) -> Result<Vec<Member>> {
        let req = self.bot.get_chat_administrators(Self::tg_chat(chat_id));
        let admins = match timeout(self.request_timeout, req.send()).await {
            Ok(Ok(admins)) => admins,
            Ok(Err(e)) => return Err(Error::Tagging(format!("telegram error: {e}"))),
            Err(_) => return Err(Error::Tagging("administrator fetch timed out".to_string())),
        };

        Ok(admins
            .into_iter()
            .map(|m| {
                let user = m.user;
                Member {
                    name: non_empty(user.first_name),
                    username: user.username,
                    is_bot: user.is_bot,
                }
            })
            .collect())
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
