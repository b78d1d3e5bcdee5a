/**
 * In-Memory Store
 *
 * Keeps participants and messages in vectors behind a single tokio
 * `RwLock`. Used when no `DATABASE_URL` is configured and as a test
 * double. Registration runs under one write guard, so the uniqueness check
 * and both inserts happen as a unit.
 */

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{next_status, ChatStore, StoreError};
use crate::shared::{Message, Participant};

#[derive(Debug, Default)]
struct MemoryState {
    participants: Vec<Participant>,
    messages: Vec<Message>,
}

/// Store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatStore for MemoryStore {
    async fn register(&self, participant: &Participant, notice: &Message) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.participants.iter().any(|p| p.name == participant.name) {
            return Err(StoreError::Duplicate(participant.name.clone()));
        }
        state.participants.push(participant.clone());
        state.messages.push(notice.clone());
        Ok(())
    }

    async fn find_participant(&self, name: &str) -> Result<Option<Participant>, StoreError> {
        let state = self.state.read().await;
        Ok(state.participants.iter().find(|p| p.name == name).cloned())
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, StoreError> {
        Ok(self.state.read().await.participants.clone())
    }

    async fn append_message(&self, message: &Message) -> Result<(), StoreError> {
        self.state.write().await.messages.push(message.clone());
        Ok(())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        Ok(self.state.read().await.messages.clone())
    }

    async fn touch_participant(&self, name: &str, now: i64) -> Result<Option<i64>, StoreError> {
        let mut state = self.state.write().await;
        Ok(state
            .participants
            .iter_mut()
            .find(|p| p.name == name)
            .map(|participant| {
                participant.last_status = next_status(participant.last_status, now);
                participant.last_status
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MessageKind;
    use assert_matches::assert_matches;

    fn participant(name: &str, last_status: i64) -> Participant {
        Participant {
            name: name.to_string(),
            last_status,
        }
    }

    #[tokio::test]
    async fn test_register_writes_participant_and_notice() {
        let store = MemoryStore::new();
        let alice = participant("Alice", 1);
        store.register(&alice, &Message::join_notice("Alice")).await.unwrap();

        assert_eq!(store.list_participants().await.unwrap(), vec![alice]);
        let messages = store.list_messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::Status);
    }

    #[tokio::test]
    async fn test_duplicate_register_writes_nothing() {
        let store = MemoryStore::new();
        store
            .register(&participant("Alice", 1), &Message::join_notice("Alice"))
            .await
            .unwrap();

        let result = store
            .register(&participant("Alice", 2), &Message::join_notice("Alice"))
            .await;

        assert_matches!(result, Err(StoreError::Duplicate(name)) if name == "Alice");
        assert_eq!(store.list_participants().await.unwrap().len(), 1);
        assert_eq!(store.list_messages().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_touch_unknown_participant() {
        let store = MemoryStore::new();
        assert_eq!(store.touch_participant("ghost", 10).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_touch_is_strictly_increasing() {
        let store = MemoryStore::new();
        store
            .register(&participant("Alice", 500), &Message::join_notice("Alice"))
            .await
            .unwrap();

        assert_eq!(store.touch_participant("Alice", 500).await.unwrap(), Some(501));
        assert_eq!(store.touch_participant("Alice", 900).await.unwrap(), Some(900));
        let found = store.find_participant("Alice").await.unwrap().unwrap();
        assert_eq!(found.last_status, 900);
    }

    #[tokio::test]
    async fn test_messages_keep_insertion_order() {
        let store = MemoryStore::new();
        for text in ["one", "two", "three"] {
            store
                .append_message(&Message::new("A", "Todos", text, MessageKind::Message))
                .await
                .unwrap();
        }

        let texts: Vec<String> = store
            .list_messages()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }
}
