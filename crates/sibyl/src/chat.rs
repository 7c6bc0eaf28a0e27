//! Conversational sessions with streamed replies.

use crate::client::{GenerationRequest, Generator, Turn};
use crate::fallback::{CHAT_FALLBACK, CHAT_GREETING};
use crate::persona::chat_instruction;
use crate::types::{ChatMessage, ChatRole};
use futures_util::StreamExt;
use std::sync::Arc;

/// One chat activation. Created when the chat surface opens, reused for every
/// turn and dropped when it closes.
pub struct ChatSession {
    generator: Arc<dyn Generator>,
    model: String,
    instruction: String,
    /// What the user sees, greeting included.
    history: Vec<ChatMessage>,
    /// What the model is sent; only completed exchanges.
    transcript: Vec<Turn>,
    next_id: u64,
}

impl ChatSession {
    pub fn new(generator: Arc<dyn Generator>, model: impl Into<String>) -> Self {
        let mut session = Self {
            generator,
            model: model.into(),
            instruction: chat_instruction(),
            history: Vec::new(),
            transcript: Vec::new(),
            next_id: 1,
        };
        session.push(ChatRole::Model, CHAT_GREETING.to_string());
        session
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    fn push(&mut self, role: ChatRole, text: String) -> usize {
        self.history.push(ChatMessage {
            id: self.next_id,
            role,
            text,
        });
        self.next_id += 1;
        self.history.len() - 1
    }

    /// Send one user turn and stream the reply into history.
    ///
    /// `on_update` sees the reply as it grows, one call per fragment. A failed
    /// turn appends the fallback line instead and leaves the session usable.
    pub async fn send<F>(&mut self, text: &str, mut on_update: F) -> &ChatMessage
    where
        F: FnMut(&str),
    {
        self.push(ChatRole::User, text.to_string());
        self.transcript.push(Turn::user(text));

        let mut request = GenerationRequest::new(&self.model, text)
            .with_system_instruction(self.instruction.as_str());
        request.contents = self.transcript.clone();

        let generator = Arc::clone(&self.generator);
        let mut stream = match generator.stream(request).await {
            Ok(stream) => stream,
            Err(e) => {
                log::error!("Chat turn failed to start: {}", e);
                return self.fail_turn();
            }
        };

        let reply = self.push(ChatRole::Model, String::new());
        while let Some(fragment) = stream.next().await {
            match fragment {
                Ok(fragment) => {
                    self.history[reply].text.push_str(&fragment);
                    on_update(&self.history[reply].text);
                }
                Err(e) => {
                    log::error!("Chat stream interrupted: {}", e);
                    return self.fail_turn();
                }
            }
        }

        if self.history[reply].text.is_empty() {
            log::warn!("Chat reply was empty");
            self.history.remove(reply);
            return self.fail_turn();
        }

        let full = self.history[reply].text.clone();
        self.transcript.push(Turn::model(full));
        &self.history[reply]
    }

    fn fail_turn(&mut self) -> &ChatMessage {
        self.transcript.pop();
        let index = self.push(ChatRole::Model, CHAT_FALLBACK.to_string());
        &self.history[index]
    }
}
