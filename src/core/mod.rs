//! Core types & traits: domain-agnostic contracts for tools and prompts.

pub mod args;
pub mod error;
pub mod prompt;
pub mod tool;
