use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use crate::{
    domain::{ChatId, ChatKind},
    errors::Error,
    Result,
};

/// Injectable per-chat activation flag store.
///
/// Absence of a chat id is equivalent to inactive. Implementations must
/// tolerate concurrent access keyed by chat id; state lives for the process
/// lifetime only.
pub trait ActivationStore: Send + Sync {
    fn set_active(&self, chat_id: ChatId, active: bool);
    fn is_active(&self, chat_id: ChatId) -> bool;
}

/// Default store: a mutex-guarded set of active chat ids.
#[derive(Default)]
pub struct InMemoryActivationStore {
    active: Mutex<HashSet<i64>>,
}

impl InMemoryActivationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivationStore for InMemoryActivationStore {
    fn set_active(&self, chat_id: ChatId, active: bool) {
        let mut set = self.active.lock().expect("activation store poisoned");
        if active {
            set.insert(chat_id.0);
        } else {
            set.remove(&chat_id.0);
        }
    }

    fn is_active(&self, chat_id: ChatId) -> bool {
        self.active
            .lock()
            .expect("activation store poisoned")
            .contains(&chat_id.0)
    }
}

/// Activation lifecycle on top of a store.
///
/// Only activation is chat-type gated; deactivation and lookup work for any
/// chat.
#[derive(Clone)]
pub struct ActivationManager {
    store: Arc<dyn ActivationStore>,
}

impl ActivationManager {
    pub fn new(store: Arc<dyn ActivationStore>) -> Self {
        Self { store }
    }

    pub fn activate(&self, chat_id: ChatId, chat_kind: ChatKind) -> Result<()> {
        if !chat_kind.is_group_like() {
            return Err(Error::WrongChatType);
        }
        self.store.set_active(chat_id, true);
        Ok(())
    }

    /// Idempotent; an absent key is tolerated.
    pub fn deactivate(&self, chat_id: ChatId) {
        self.store.set_active(chat_id, false);
    }

    pub fn is_active(&self, chat_id: ChatId) -> bool {
        self.store.is_active(chat_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> ActivationManager {
        ActivationManager::new(Arc::new(InMemoryActivationStore::new()))
    }

    #[test]
    fn activate_requires_group_like_chat() {
        let mgr = manager();
        let chat = ChatId(1);

        for kind in [ChatKind::Private, ChatKind::Channel] {
            assert!(matches!(
                mgr.activate(chat, kind),
                Err(Error::WrongChatType)
            ));
            assert!(!mgr.is_active(chat));
        }

        mgr.activate(chat, ChatKind::Group).unwrap();
        assert!(mgr.is_active(chat));

        mgr.activate(ChatId(2), ChatKind::Supergroup).unwrap();
        assert!(mgr.is_active(ChatId(2)));
    }

    #[test]
    fn deactivate_is_idempotent() {
        let mgr = manager();
        let chat = ChatId(7);

        // Never activated: both calls are fine and leave the chat inactive.
        mgr.deactivate(chat);
        assert!(!mgr.is_active(chat));
        mgr.deactivate(chat);
        assert!(!mgr.is_active(chat));

        mgr.activate(chat, ChatKind::Group).unwrap();
        mgr.deactivate(chat);
        assert!(!mgr.is_active(chat));
    }

    #[test]
    fn unknown_chats_default_to_inactive() {
        assert!(!manager().is_active(ChatId(42)));
    }

    #[test]
    fn chats_are_independent() {
        let mgr = manager();
        mgr.activate(ChatId(1), ChatKind::Group).unwrap();
        mgr.activate(ChatId(2), ChatKind::Group).unwrap();

        mgr.deactivate(ChatId(1));
        assert!(!mgr.is_active(ChatId(1)));
        assert!(mgr.is_active(ChatId(2)));
    }
}
