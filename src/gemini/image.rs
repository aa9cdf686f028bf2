use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, InlineData, Part};
use super::{GeneratedImage, ImageGenRequest, ImageGenService, ImageGeneration};
use crate::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: ImageGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageGenerationConfig {
    response_modalities: Vec<String>,
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
    image_size: String,
}

pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, client),
        }
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        self.http.model()
    }

    fn build_request(request: &ImageGenRequest) -> GenerateRequest {
        let mut parts: Vec<Part> = request
            .references
            .iter()
            .map(|reference| Part::InlineData {
                inline_data: InlineData {
                    mime_type: reference.mime_type.clone(),
                    data: base64::engine::general_purpose::STANDARD.encode(&reference.bytes),
                },
            })
            .collect();
        parts.push(Part::Text {
            text: request.prompt.clone(),
        });

        GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: ImageGenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: request.aspect_ratio.as_str().to_string(),
                    image_size: request.size.as_str().to_string(),
                },
            },
        }
    }

    fn extract(response: GenerateContentResponse) -> Result<ImageGeneration> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return Ok(ImageGeneration::default());
        };

        let mut generation = ImageGeneration::default();
        for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
            match part {
                Part::InlineData { inline_data } => {
                    let bytes = base64::engine::general_purpose::STANDARD
                        .decode(&inline_data.data)
                        .map_err(|e| {
                            Error::Api(format!("Failed to decode base64 image data: {}", e))
                        })?;
                    tracing::debug!(
                        "Gemini returned image ({} bytes, mime_type: {})",
                        bytes.len(),
                        inline_data.mime_type
                    );
                    generation.images.push(GeneratedImage {
                        bytes,
                        mime_type: inline_data.mime_type,
                    });
                }
                Part::Text { text } => generation.commentary.push(text),
            }
        }

        Ok(generation)
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiImageClient);

#[async_trait]
impl ImageGenService for GeminiImageClient {
    async fn generate(&self, request: &ImageGenRequest) -> Result<ImageGeneration> {
        let body = Self::build_request(request);
        let response: GenerateContentResponse = self.http.generate_content(&body).await?;
        Self::extract(response)
    }
}
