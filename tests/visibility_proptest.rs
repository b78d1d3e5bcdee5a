//! Property-based tests for the visible-subset filter
//!
//! Uses proptest to generate random logs and verify the filter keeps order,
//! never leaks other people's private entries, and honours `limit`.

use proptest::prelude::*;

use chatroom::backend::messages::feed::visible_tail;
use chatroom::shared::{Message, MessageKind};

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["A", "B", "C", "Todos"]).prop_map(str::to_string)
}

fn kind() -> impl Strategy<Value = MessageKind> {
    prop::sample::select(vec![
        MessageKind::Message,
        MessageKind::PrivateMessage,
        MessageKind::Status,
    ])
}

fn log() -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec((name(), name(), kind()), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (from, to, kind))| Message {
                from,
                to,
                text: format!("m{i}"),
                kind,
                time: "00:00:00".to_string(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_visible_entries_satisfy_predicate(messages in log(), user in name()) {
        for message in visible_tail(messages, Some(user.as_str()), None) {
            prop_assert!(
                message.kind == MessageKind::Message || message.to == user || message.from == user
            );
        }
    }

    #[test]
    fn test_filter_is_stable(messages in log(), user in name()) {
        let expected: Vec<Message> = messages
            .iter()
            .filter(|m| m.is_visible_to(Some(user.as_str())))
            .cloned()
            .collect();
        prop_assert_eq!(visible_tail(messages, Some(user.as_str()), None), expected);
    }

    #[test]
    fn test_limit_is_trailing_slice(messages in log(), user in name(), limit in 1usize..10) {
        let all = visible_tail(messages.clone(), Some(user.as_str()), None);
        let tail = visible_tail(messages, Some(user.as_str()), Some(limit));

        prop_assert_eq!(tail.len(), all.len().min(limit));
        prop_assert_eq!(&all[all.len() - tail.len()..], &tail[..]);
    }
}
