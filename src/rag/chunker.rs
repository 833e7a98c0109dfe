//! Splits raw document text into bounded-size passages
//!
//! Sentence boundaries are approximated by the ". " delimiter; there is
//! no semantic boundary detection. The size limit is a soft character
//! budget, never a hard truncation.

use serde::{Deserialize, Serialize};

/// A contiguous extracted unit of document text used as a retrieval
/// candidate. Position is implicit in `Vec` order; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub text: String,
}

impl Passage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Split document text into passages of roughly `max_chunk_chars` characters.
///
/// Sentences are accumulated greedily; when appending the next sentence
/// would make the buffer reach or exceed the budget, the buffer is closed
/// as one passage and a new one starts with that sentence. A single
/// sentence longer than the budget is still emitted as one oversized
/// passage. Empty input produces no passages.
pub fn split(document_text: &str, max_chunk_chars: usize) -> Vec<Passage> {
    let mut passages = Vec::new();
    let mut current = String::new();

    for sentence in document_text.split(". ") {
        if sentence.trim().is_empty() {
            continue;
        }

        // The budget counts characters, not bytes, so multi-byte text
        // does not close chunks early.
        if !current.is_empty()
            && current.chars().count() + sentence.chars().count() >= max_chunk_chars
        {
            passages.push(Passage::new(current.trim()));
            current.clear();
        }

        current.push_str(sentence);
        current.push_str(". ");
    }

    if !current.trim().is_empty() {
        passages.push(Passage::new(current.trim()));
    }

    passages
}
