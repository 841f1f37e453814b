/// Conversational small talk handled without retrieval or generation.
///
/// Matching is case-insensitive substring over three fixed phrase sets,
/// checked greetings first, then thanks, then farewells. Substring matching
/// is deliberately loose (a farewell keyword inside an unrelated word will
/// match); tightening it to whole words would change observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smalltalk {
    Greeting,
    Thanks,
    Farewell,
}

const GREETINGS: &[&str] = &[
    "hello",
    "hi there",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "こんにちは",
    "おはよう",
    "こんばんは",
];

const THANKS: &[&str] = &["thank you", "thanks", "thx", "ありがとう"];

const FAREWELLS: &[&str] = &["goodbye", "bye", "see you", "さようなら", "またね"];

impl Smalltalk {
    /// Classifies `text`, or `None` when it is a real question.
    pub fn classify(text: &str) -> Option<Smalltalk> {
        let lowered = text.to_lowercase();
        let contains_any = |phrases: &[&str]| phrases.iter().any(|p| lowered.contains(p));

        if contains_any(GREETINGS) {
            Some(Smalltalk::Greeting)
        } else if contains_any(THANKS) {
            Some(Smalltalk::Thanks)
        } else if contains_any(FAREWELLS) {
            Some(Smalltalk::Farewell)
        } else {
            None
        }
    }

    /// The fixed canned reply for this category.
    pub fn reply(&self) -> &'static str {
        match self {
            Smalltalk::Greeting => "Hello! How can I help you today?",
            Smalltalk::Thanks => "You're welcome! Happy to help.",
            Smalltalk::Farewell => "Goodbye! Feel free to ask again anytime.",
        }
    }
}
