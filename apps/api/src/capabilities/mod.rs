//! Soft external capabilities. Each is a trait with a model-backed adapter and a
//! deterministic stand-in; `main` picks one per capability from `Config`.
//! Neither ever returns an error to the orchestrator.

pub mod prompts;
pub mod sentiment;
pub mod translation;

/// Language the conversation is processed in.
pub const WORKING_LANGUAGE: &str = "en";
