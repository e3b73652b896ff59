//! Boundary with the external chat completion service.

mod client;
pub mod prompts;

pub use client::{extract_json, ChatBackend, ChatClient, ScriptedBackend};
