//! Command-line helpers for Google's Gemini `generateContent` API
//!
//! Provides two small tools built on a shared library: `consult` asks a text
//! model a question (optionally with image attachments and web-search
//! grounding), and `imagine` generates images from a prompt and saves them to
//! disk.

pub mod config;
pub mod error;
pub mod gemini;
pub mod input;
pub mod mime;
pub mod options;
pub mod render;

pub use error::{Error, Result};
