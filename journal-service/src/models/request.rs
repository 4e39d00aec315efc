//! Request payloads accepted by the generation endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// One prior turn of the conversation, supplied inline by the caller.
///
/// Turns are chronological and never mutated. `role` is "user" or
/// "assistant"; anything else is carried through but skipped when the
/// transcript is composed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

/// Body of a POST generation request.
///
/// Both `/api` and `/Journal/api` deserialize into this shape; fields a
/// route does not use are simply absent.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// The user's text. Validated by the handler, not here, so a missing or
    /// non-string value produces a 400 rather than a deserialization error.
    #[serde(default, deserialize_with = "string_or_none")]
    pub prompt: Option<String>,

    /// Raw entry type as sent by the client; see [`EntryType::from`].
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,

    /// Accepted for client convenience; the gateway does not persist entries.
    #[serde(default, rename = "journalId")]
    pub journal_id: Option<String>,

    /// Prior conversation turns, oldest first.
    #[serde(default)]
    pub context: Option<Vec<ConversationTurn>>,
}

/// How the prompt should be framed for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// A fresh journal entry expecting an empathetic reflection.
    NewEntry,
    /// A turn in an ongoing conversation (the default).
    Continuation,
}

impl From<Option<&str>> for EntryType {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some("new_entry") => EntryType::NewEntry,
            _ => EntryType::Continuation,
        }
    }
}

/// Accepts a JSON string, treats any other JSON value as absent.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_string_prompt_deserializes_as_absent() {
        let req: GenerateRequest = serde_json::from_str(r#"{"prompt": 42}"#).unwrap();
        assert!(req.prompt.is_none());
    }

    #[test]
    fn unknown_entry_type_defaults_to_continuation() {
        assert_eq!(EntryType::from(Some("reflection")), EntryType::Continuation);
        assert_eq!(EntryType::from(None), EntryType::Continuation);
        assert_eq!(EntryType::from(Some("new_entry")), EntryType::NewEntry);
    }

    #[test]
    fn context_turns_keep_their_order() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"prompt": "hi", "context": [
                {"role": "user", "content": "first"},
                {"role": "assistant", "content": "second"}
            ]}"#,
        )
        .unwrap();
        let context = req.context.unwrap();
        assert_eq!(context[0].content, "first");
        assert_eq!(context[1].content, "second");
    }
}
