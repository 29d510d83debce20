//! The fixed emotion-to-phrase table.
//!
//! Table order is load-bearing: it fixes the label list shown to the LLM,
//! the substring tie-break in [`crate::llm::classify`], and the order in
//! which search queries are issued.

/// Canonical emotion labels and their Korean search-phrase synonyms.
pub const EMOTION_PHRASES: [(&str, &[&str]); 6] = [
    ("기쁨", &["기뻐하는", "즐거운", "행복한"]),
    ("상처", &["상처받은", "상처깊은", "마음아픈"]),
    ("슬픔", &["슬퍼하는", "우울한", "슬픈", "마음아픈"]),
    ("분노", &["화내는", "분노하는", "빡친"]),
    ("불안", &["불안해하는", "불안한", "불안", "심란한"]),
    ("당황", &["당황하는", "당황한", "당황스러운"]),
];

/// Canonical labels in table order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    EMOTION_PHRASES.iter().map(|(label, _)| *label)
}

/// Phrase list for a label, or `None` for an unrecognized label.
pub fn phrases_for(label: &str) -> Option<&'static [&'static str]> {
    EMOTION_PHRASES
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, phrases)| *phrases)
}
