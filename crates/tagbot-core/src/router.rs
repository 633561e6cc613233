use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, info, warn};

use crate::{
    activation::{ActivationManager, ActivationStore},
    commands::{self, Command},
    compose::Composer,
    domain::{ChatId, Member, Update},
    errors::Error,
    ports::MemberDirectory,
    replies, Result,
};

/// A composed outbound reply.
///
/// `markdown` asks the transport for Markdown rendering; composed tag
/// messages stay plain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markdown: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

/// Classifies inbound updates and produces replies.
///
/// Every failure is converted into a defined outcome here (a reply to send,
/// or explicitly no reply) so the transport can acknowledge deliveries
/// unconditionally.
pub struct CommandRouter {
    activation: ActivationManager,
    directory: Arc<dyn MemberDirectory>,
    composer: Composer,
    rng: Mutex<StdRng>,
}

impl CommandRouter {
    pub fn new(store: Arc<dyn ActivationStore>, directory: Arc<dyn MemberDirectory>) -> Self {
        Self {
            activation: ActivationManager::new(store),
            directory,
            composer: Composer::new(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded constructor for reproducible member picks and composition.
    pub fn with_seed(
        store: Arc<dyn ActivationStore>,
        directory: Arc<dyn MemberDirectory>,
        seed: u64,
    ) -> Self {
        Self {
            activation: ActivationManager::new(store),
            directory,
            composer: Composer::with_seed(seed),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub async fn handle(&self, update: &Update) -> Option<Reply> {
        info!(
            chat_id = update.chat_id.0,
            "received: {:?} from {}", update.text, update.sender_name
        );

        match commands::classify(&update.text) {
            Command::Start => Some(
                match self.activation.activate(update.chat_id, update.chat_kind) {
                    Ok(()) => Reply::markdown(replies::ACTIVATED),
                    Err(_) => Reply::plain(replies::WRONG_CHAT_TYPE),
                },
            ),
            Command::Stop => {
                self.activation.deactivate(update.chat_id);
                Some(Reply::markdown(replies::DEACTIVATED))
            }
            Command::Tag(explicit) => Some(self.tag(update.chat_id, explicit).await),
            Command::Status => Some(Reply::markdown(replies::status_text(
                self.activation.is_active(update.chat_id),
            ))),
            Command::Help => Some(Reply::markdown(replies::help_text())),
            Command::Unrecognized => {
                debug!(chat_id = update.chat_id.0, "ignoring unrecognized text");
                None
            }
        }
    }

    async fn tag(&self, chat_id: ChatId, explicit: Option<String>) -> Reply {
        // Explicit target: no lookup, no handle prefix.
        if let Some(name) = explicit {
            return Reply::plain(self.composer.compose(&name));
        }

        match self.pick_member(chat_id).await {
            Ok(member) => {
                let name = member.display_name();
                let message = self.composer.compose(name);
                let text = match &member.username {
                    Some(handle) => format!("@{handle} {message}"),
                    None => format!("{name} {message}"),
                };
                Reply::plain(text)
            }
            Err(Error::NoEligibleMembers) => Reply::plain(replies::NO_MEMBERS),
            Err(e) => {
                // No retry; the user gets the fixed failure reply.
                warn!(chat_id = chat_id.0, "tagging failed: {e}");
                Reply::plain(replies::TAGGING_FAILED)
            }
        }
    }

    async fn pick_member(&self, chat_id: ChatId) -> Result<Member> {
        let admins = self.directory.administrators(chat_id).await?;
        let candidates: Vec<Member> = admins.into_iter().filter(|m| !m.is_bot).collect();

        let mut rng = self.rng.lock().expect("router rng poisoned");
        candidates
            .choose(&mut *rng)
            .cloned()
            .ok_or(Error::NoEligibleMembers)
    }
}
