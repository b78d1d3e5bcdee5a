//! Visible-subset filtering for `GET /messages`.
//!
//! A stable predicate pass over the full log followed by a trailing slice.
//! The log is not re-sorted, so results keep insertion order.

use crate::shared::Message;

/// Messages `user` may see, keeping only the last `limit` if given
pub fn visible_tail(messages: Vec<Message>, user: Option<&str>, limit: Option<usize>) -> Vec<Message> {
    let mut visible: Vec<Message> = messages
        .into_iter()
        .filter(|message| message.is_visible_to(user))
        .collect();

    if let Some(limit) = limit {
        let skip = visible.len().saturating_sub(limit);
        visible.drain(..skip);
    }

    visible
}
