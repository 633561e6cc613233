/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Kind of chat an update originated from.
///
/// Only `Group` and `Supergroup` may activate the tagger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    pub fn is_group_like(self) -> bool {
        matches!(self, ChatKind::Group | ChatKind::Supergroup)
    }
}

/// A candidate to tag, fetched fresh from the administrator list per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: Option<String>,
    pub username: Option<String>,
    pub is_bot: bool,
}

impl Member {
    /// Display name with the fixed placeholder for members without one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(crate::replies::DEFAULT_MEMBER_NAME)
    }
}

/// Parsed inbound update, as decoded by the transport adapter.
#[derive(Clone, Debug)]
pub struct Update {
    pub chat_id: ChatId,
    pub chat_kind: ChatKind,
    pub text: String,
    pub sender_name: String,
}
