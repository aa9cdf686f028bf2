//! Gemini service integration for consultation and image generation
//!
//! Provides typed clients for Gemini's `generateContent` API along with the
//! service traits and mocks used by the CLI tools and their tests.

pub mod client;
pub mod consult;
pub mod image;
pub mod mock;
pub mod types;

pub use consult::GeminiConsultClient;
pub use image::GeminiImageClient;
pub use mock::{MockConsultClient, MockImageGenClient};
pub use types::Web;

use crate::input::ImageAttachment;
use crate::options::{AspectRatio, ImageSize, MediaResolution, ThinkingLevel};
use crate::Result;
use async_trait::async_trait;

/// A fully-assembled consultation request.
#[derive(Debug, Clone)]
pub struct ConsultRequest {
    pub attachments: Vec<ImageAttachment>,
    pub question: String,
    pub thinking: ThinkingLevel,
    pub media_resolution: MediaResolution,
    pub search_grounding: bool,
}

/// The model's answer to a consultation.
#[derive(Debug, Clone, PartialEq)]
pub struct Consultation {
    pub text_parts: Vec<String>,
    /// `Some` only when the response carried search grounding; the list may
    /// still be empty.
    pub sources: Option<Vec<Web>>,
}

/// A fully-assembled image generation request.
#[derive(Debug, Clone)]
pub struct ImageGenRequest {
    pub references: Vec<ImageAttachment>,
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub size: ImageSize,
}

/// One decoded image returned by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Everything the image model returned for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageGeneration {
    pub images: Vec<GeneratedImage>,
    pub commentary: Vec<String>,
}

#[async_trait]
pub trait ConsultService: Send + Sync {
    async fn consult(&self, request: &ConsultRequest) -> Result<Consultation>;
}

#[async_trait]
pub trait ImageGenService: Send + Sync {
    async fn generate(&self, request: &ImageGenRequest) -> Result<ImageGeneration>;
}


// Adds a test-only builder that redirects a wrapped client at a mock server.
#[cfg(test)]
macro_rules! impl_with_gemini_base_url {
    ($client:ty) => {
        impl $client {
            pub(crate) fn with_base_url(mut self, base_url: String) -> Self {
                self.http = self.http.with_base_url(base_url);
                self
            }
        }
    };
}

#[cfg(test)]
pub(crate) use impl_with_gemini_base_url;
