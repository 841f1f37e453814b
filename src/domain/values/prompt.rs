use crate::domain::ports::completion_port::ChatMessage;

/// Fixed instruction constraining the model to the supplied context.
pub const SYSTEM_INSTRUCTION: &str = "You are an assistant that answers questions \
using only the reference information provided in the user message. If the reference \
information does not contain the answer, reply exactly: \"I'm sorry, but I couldn't \
find that information.\" Do not speculate or draw on outside knowledge. Answer \
concisely and do not volunteer information that was not asked for.";

/// Builds the two-message prompt for one question: the fixed system
/// instruction plus a user turn carrying the context block, the literal
/// question, and a concision reminder.
pub fn build_messages(context: &str, question: &str) -> Vec<ChatMessage> {
    let user = format!(
        "Reference information:\n{context}\n\nQuestion: {question}\n\nAnswer briefly, using only the reference information above."
    );
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(user),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::completion_port::Role;

    #[test]
    fn messages_carry_context_and_literal_question() {
        let messages = build_messages("[T1]\nC1", "What is C1?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("[T1]\nC1"));
        assert!(messages[1].content.contains("Question: What is C1?"));
    }
}
