//! Multi-turn conversation over the generation endpoint
//!
//! History is an explicit ordered sequence of turns owned by the caller
//! and rendered into every generation prompt. Nothing here is module
//! state, so independent conversations can run concurrently.

use crate::errors::Result;
use crate::rag::generator::Generator;
use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One utterance in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Ordered conversation history, owned by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::User,
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the history as a labeled transcript
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|turn| format!("{}: {}", turn.role.label(), turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Build the generation prompt for the next user input, with the
    /// full history ahead of it
    pub fn prompt_for(&self, user_input: &str) -> String {
        if self.turns.is_empty() {
            return format!("User: {user_input}\nAssistant:");
        }
        format!("{}\nUser: {user_input}\nAssistant:", self.render())
    }
}

/// A conversation bound to a generator
///
/// Each exchange sends the whole history so the model sees prior turns.
pub struct ChatSession<G> {
    generator: G,
    conversation: Conversation,
}

impl<G: Generator> ChatSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            conversation: Conversation::new(),
        }
    }

    /// Resume from an existing history
    pub fn with_history(generator: G, conversation: Conversation) -> Self {
        Self {
            generator,
            conversation,
        }
    }

    /// Send one user message and record both sides of the exchange
    pub async fn say(&mut self, user_input: &str) -> Result<String> {
        let prompt = self.conversation.prompt_for(user_input);
        let reply = self.generator.generate(&prompt).await?;
        let reply = reply.trim().to_string();

        self.conversation.push_user(user_input);
        self.conversation.push_assistant(reply.clone());

        Ok(reply)
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }
}
