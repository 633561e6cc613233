/// Core error type.
///
/// The adapter crate maps transport-specific failures into this type so the
/// router can turn every failure into a defined user-facing outcome instead of
/// letting it escape as a fault.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("command only valid in group chats")]
    WrongChatType,

    #[error("no eligible members to tag")]
    NoEligibleMembers,

    #[error("administrator lookup failed: {0}")]
    Tagging(String),

    #[error("send failed: {0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, Error>;
