//! Environment-driven configuration shared by both tools.

use crate::{Error, Result};

pub const DEFAULT_CONSULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub consult_model: String,
    pub image_model: String,
}

impl Config {
    /// Load configuration from the environment (and a `.env` file if present).
    ///
    /// `GEMINI_API_KEY` takes precedence over `GOOGLE_API_KEY`; one of the
    /// two must be set.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| Error::Config("GEMINI_API_KEY not set".to_string()))?;

        Ok(Self {
            api_key,
            consult_model: std::env::var("GEMINI_CONSULT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CONSULT_MODEL.to_string()),
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
        })
    }
}
