//! Prompt composition for the generation endpoints.

use crate::models::ConversationTurn;

/// Persona preamble for the conversational flow.
const CONVERSATION_PERSONA: &str = "You are a thoughtful journaling assistant. \
Help the user explore their thoughts and feelings through gentle questions and \
supportive responses. Keep responses conversational and encouraging.";

/// Instructional prompt for a fresh journal entry: empathetic acknowledgment,
/// one reflective question, 2-3 sentences, tone-matched.
pub fn entry_reflection(entry: &str) -> String {
    format!(
        "You are a supportive AI journaling companion. The user has shared: \"{entry}\"\n\n\
         Please respond with:\n\
         1. A warm, empathetic acknowledgment of their thoughts/feelings\n\
         2. A thoughtful question or reflection to help them explore deeper\n\
         3. Keep it conversational, supportive, and around 2-3 sentences\n\n\
         Be genuine, not overly cheerful, and match their emotional tone."
    )
}

/// Flattens the persona, prior turns, and the new prompt into a single text
/// blob ending with an `Assistant:` cue so the model continues the dialogue.
///
/// Turns whose role is neither "user" nor "assistant" are skipped silently.
pub fn conversation(prompt: &str, history: &[ConversationTurn]) -> String {
    let mut composed = String::from(CONVERSATION_PERSONA);

    if !history.is_empty() {
        composed.push_str("\n\nPrevious conversation:\n");
        for turn in history {
            let speaker = match turn.role.as_str() {
                "user" => "User",
                "assistant" => "Assistant",
                _ => continue,
            };
            composed.push_str(speaker);
            composed.push_str(": ");
            composed.push_str(&turn.content);
            composed.push('\n');
        }
    }

    composed.push_str(&format!("\nUser: {prompt}\nAssistant:"));
    composed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: &str, content: &str) -> ConversationTurn {
        ConversationTurn {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn conversation_without_history_ends_with_assistant_cue() {
        let composed = conversation("I feel anxious today", &[]);
        assert!(composed.starts_with("You are a thoughtful journaling assistant."));
        assert!(composed.ends_with("\nUser: I feel anxious today\nAssistant:"));
        assert!(!composed.contains("Previous conversation:"));
    }

    #[test]
    fn conversation_includes_prior_turns_in_order() {
        let history = vec![
            turn("user", "I had a rough day"),
            turn("assistant", "What made it rough?"),
        ];
        let composed = conversation("Work, mostly", &history);

        let user_idx = composed.find("User: I had a rough day\n").unwrap();
        let assistant_idx = composed.find("Assistant: What made it rough?\n").unwrap();
        assert!(user_idx < assistant_idx);
        assert!(composed.ends_with("\nUser: Work, mostly\nAssistant:"));
    }

    #[test]
    fn unknown_roles_are_skipped() {
        let history = vec![
            turn("user", "kept line"),
            turn("system", "dropped line"),
            turn("ai", "also dropped"),
        ];
        let composed = conversation("next", &history);
        assert!(composed.contains("User: kept line"));
        assert!(!composed.contains("dropped line"));
        assert!(!composed.contains("also dropped"));
    }

    #[test]
    fn entry_reflection_embeds_the_entry_verbatim() {
        let composed = entry_reflection("I finally finished the marathon");
        assert!(composed.contains("The user has shared: \"I finally finished the marathon\""));
        assert!(composed.contains("2-3 sentences"));
    }
}
