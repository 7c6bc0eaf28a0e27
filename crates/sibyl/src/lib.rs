//! Generation contract layer for Starwhisper.
//!
//! Builds the horoscope, tarot, natal, chat and mantra requests, sends them
//! through a [`Generator`] (normally [`GeminiClient`]) and turns every failure
//! into the request kind's fallback.

pub mod chat;
pub mod client;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod oracle;
pub mod persona;
pub mod prompts;
pub mod schema;
pub mod tarot;
pub mod types;

pub use chat::ChatSession;
pub use client::{GenerationRequest, Generator, TextStream, Turn};
pub use error::{Result, SibylError};
pub use gemini::GeminiClient;
pub use oracle::Oracle;
pub use prompts::ModelSet;
pub use tarot::{draw_spread, DrawnCard, Orientation, SpreadPosition, TarotCard, MAJOR_ARCANA};
pub use types::{
    ChatMessage, ChatRole, CorePlacement, HoroscopeResult, KeyHouse, Keywords, NatalAnalysis,
    NatalRequest,
};
