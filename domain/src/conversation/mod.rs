//! Conversation entities: chat messages and the append-only transcript.

pub mod entities;

pub use entities::{ChatMessage, Sender, Transcript};
