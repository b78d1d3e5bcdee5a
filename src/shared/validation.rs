//! Payload Validation
//!
//! Schema checks for incoming JSON payloads. A [`Schema`] is a fixed list
//! of field rules; [`Schema::check`] evaluates every rule and reports all
//! violations at once instead of stopping at the first one. Keys the schema
//! does not know about are rejected, as joi object schemas do by default.
//!
//! Two schemas are defined:
//!
//! - [`PARTICIPANT`] - `name`: required, non-empty string
//! - [`MESSAGE`] - `to`, `text`: required, non-empty strings;
//!   `type`: required, `message` or `private_message`

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::error::{FieldError, ValidationErrors};
use crate::shared::message::{MessageKind, NewMessage};
use crate::shared::participant::NewParticipant;

/// Rule applied to one field
#[derive(Debug, Clone, Copy)]
pub enum FieldRule {
    /// Required string with at least one character
    NonEmptyString,
    /// Required string naming one of the listed message kinds
    OneOfKinds(&'static [MessageKind]),
}

/// A named set of field rules
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [(&'static str, FieldRule)],
}

pub const PARTICIPANT: Schema = Schema {
    name: "participant",
    fields: &[("name", FieldRule::NonEmptyString)],
};

pub const MESSAGE: Schema = Schema {
    name: "message",
    fields: &[
        ("to", FieldRule::NonEmptyString),
        ("text", FieldRule::NonEmptyString),
        ("type", FieldRule::OneOfKinds(&MessageKind::POSTABLE)),
    ],
};

impl Schema {
    /// Check `payload` against every rule of this schema
    pub fn check(&self, payload: &Value) -> Result<(), ValidationErrors> {
        let Some(object) = payload.as_object() else {
            return Err(ValidationErrors::single("value", "must be of type object"));
        };

        let mut errors = Vec::new();

        for (field, rule) in self.fields {
            if let Some(reason) = check_field(object.get(*field), *rule) {
                errors.push(FieldError::new(*field, reason));
            }
        }

        for key in object.keys() {
            if !self.fields.iter().any(|(field, _)| field == key) {
                errors.push(FieldError::new(key.as_str(), "is not allowed"));
            }
        }

        match ValidationErrors::from_errors(errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }

    /// Check `payload` and deserialize it into its typed form
    pub fn accept<T: DeserializeOwned>(&self, payload: &Value) -> Result<T, ValidationErrors> {
        self.check(payload)?;
        serde_json::from_value(payload.clone())
            .map_err(|e| ValidationErrors::single("value", e.to_string()))
    }
}

fn check_field(value: Option<&Value>, rule: FieldRule) -> Option<String> {
    let value = match value {
        None | Some(Value::Null) => return Some("is required".to_string()),
        Some(value) => value,
    };
    let Some(text) = value.as_str() else {
        return Some("must be a string".to_string());
    };

    match rule {
        FieldRule::NonEmptyString if text.is_empty() => {
            Some("is not allowed to be empty".to_string())
        }
        FieldRule::NonEmptyString => None,
        FieldRule::OneOfKinds(allowed) if !allowed.iter().any(|kind| kind.as_str() == text) => {
            let names: Vec<&str> = allowed.iter().map(MessageKind::as_str).collect();
            Some(format!("must be one of [{}]", names.join(", ")))
        }
        FieldRule::OneOfKinds(_) => None,
    }
}

impl TryFrom<&Value> for NewParticipant {
    type Error = ValidationErrors;

    fn try_from(payload: &Value) -> Result<Self, Self::Error> {
        PARTICIPANT.accept(payload)
    }
}

impl TryFrom<&Value> for NewMessage {
    type Error = ValidationErrors;

    fn try_from(payload: &Value) -> Result<Self, Self::Error> {
        MESSAGE.accept(payload)
    }
}

/// Parse the `limit` query parameter of `GET /messages`
///
/// Absent means no truncation. A present value must be a positive integer.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, ValidationErrors> {
    match raw {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(Some(limit)),
            _ => Err(ValidationErrors::single("limit", "must be a positive integer")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_participant_accepts_name() {
        let participant = NewParticipant::try_from(&json!({ "name": "Alice" })).unwrap();
        assert_eq!(participant.name, "Alice");
    }

    #[test]
    fn test_participant_rejects_empty_name() {
        let errors = NewParticipant::try_from(&json!({ "name": "" })).unwrap_err();
        assert_eq!(errors.details(), vec!["\"name\" is not allowed to be empty"]);
    }

    #[test]
    fn test_participant_rejects_missing_and_non_string_name() {
        let missing = NewParticipant::try_from(&json!({})).unwrap_err();
        assert_eq!(missing.details(), vec!["\"name\" is required"]);

        let numeric = NewParticipant::try_from(&json!({ "name": 7 })).unwrap_err();
        assert_eq!(numeric.details(), vec!["\"name\" must be a string"]);
    }

    #[test]
    fn test_rejects_non_object_payload() {
        let errors = PARTICIPANT.check(&json!(["Alice"])).unwrap_err();
        assert_eq!(errors.details(), vec!["\"value\" must be of type object"]);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let errors = PARTICIPANT
            .check(&json!({ "name": "Alice", "admin": true }))
            .unwrap_err();
        assert_eq!(errors.details(), vec!["\"admin\" is not allowed"]);
    }

    #[test]
    fn test_message_accepts_both_postable_kinds() {
        let public = NewMessage::try_from(&json!({
            "to": "Todos", "text": "hello", "type": "message"
        }))
        .unwrap();
        assert_eq!(public.kind, MessageKind::Message);

        let private = NewMessage::try_from(&json!({
            "to": "Bob", "text": "psst", "type": "private_message"
        }))
        .unwrap();
        assert_eq!(private.kind, MessageKind::PrivateMessage);
    }

    #[test]
    fn test_message_rejects_status_kind() {
        let errors = NewMessage::try_from(&json!({
            "to": "Todos", "text": "hello", "type": "status"
        }))
        .unwrap_err();
        assert_eq!(
            errors.details(),
            vec!["\"type\" must be one of [message, private_message]"]
        );
    }

    #[test]
    fn test_message_collects_every_violation() {
        let errors = NewMessage::try_from(&json!({ "text": "", "type": "shout" })).unwrap_err();
        assert_eq!(
            errors.details(),
            vec![
                "\"to\" is required",
                "\"text\" is not allowed to be empty",
                "\"type\" must be one of [message, private_message]",
            ]
        );
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None), Ok(None));
        assert_eq!(parse_limit(Some("3")), Ok(Some(3)));
        assert!(parse_limit(Some("0")).is_err());
        assert!(parse_limit(Some("-2")).is_err());
        assert!(parse_limit(Some("many")).is_err());
    }
}
