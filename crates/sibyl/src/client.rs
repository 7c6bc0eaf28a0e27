//! The seam between request builders and whatever answers them.

use crate::error::Result;
use crate::types::ChatRole;
use async_trait::async_trait;
use futures_util::Stream;
use serde_json::Value;
use std::pin::Pin;

/// Text fragments in arrival order.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// One message of the conversation sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: ChatRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// A provider-neutral generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub contents: Vec<Turn>,
    pub temperature: Option<f32>,
    /// When set, the response is JSON matching this schema.
    pub response_schema: Option<Value>,
    pub thinking_budget: Option<u32>,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            contents: vec![Turn::user(prompt)],
            temperature: None,
            response_schema: None,
            thinking_budget: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_thinking_budget(mut self, budget: u32) -> Self {
        self.thinking_budget = Some(budget);
        self
    }

    /// Text of the last user turn.
    pub fn prompt(&self) -> &str {
        self.contents
            .iter()
            .rev()
            .find(|t| t.role == ChatRole::User)
            .map(|t| t.text.as_str())
            .unwrap_or("")
    }
}

/// Anything that can answer a [`GenerationRequest`].
#[async_trait]
pub trait Generator: Send + Sync {
    /// Complete the request in one response.
    async fn generate(&self, request: GenerationRequest) -> Result<String>;

    /// Complete the request as a stream of text fragments.
    async fn stream(&self, request: GenerationRequest) -> Result<TextStream>;
}
