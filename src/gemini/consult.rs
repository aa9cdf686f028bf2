use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, InlineData, Part};
use super::{ConsultRequest, ConsultService, Consultation};
use crate::options::{MediaResolution, ThinkingLevel};
use crate::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: ConsultGenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConsultGenerationConfig {
    thinking_config: ThinkingConfig,
    media_resolution: MediaResolution,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_level: ThinkingLevel,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

pub struct GeminiConsultClient {
    http: GeminiHttpClient,
}

impl GeminiConsultClient {
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

    fn build_request(request: &ConsultRequest) -> GenerateRequest {
        let mut parts: Vec<Part> = request
            .attachments
            .iter()
            .map(|attachment| Part::InlineData {
                inline_data: InlineData {
                    mime_type: attachment.mime_type.clone(),
                    data: base64::engine::general_purpose::STANDARD.encode(&attachment.bytes),
                },
            })
            .collect();
        parts.push(Part::Text {
            text: request.question.clone(),
        });

        GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: ConsultGenerationConfig {
                thinking_config: ThinkingConfig {
                    thinking_level: request.thinking,
                },
                media_resolution: request.media_resolution,
            },
            tools: request.search_grounding.then(|| {
                vec![Tool {
                    google_search: GoogleSearch {},
                }]
            }),
        }
    }

    fn extract(response: GenerateContentResponse) -> Result<Consultation> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return Err(Error::EmptyResponse("no candidates returned".to_string()));
        };

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        if parts.is_empty() {
            return Err(Error::EmptyResponse(
                "candidate contained no parts".to_string(),
            ));
        }

        let text_parts = parts
            .into_iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text),
                Part::InlineData { .. } => None,
            })
            .collect();

        // Sources only count as grounded when the entry point is present.
        let sources = match candidate.grounding_metadata {
            Some(metadata) if metadata.search_entry_point.is_some() => Some(
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .collect(),
            ),
            _ => None,
        };

        Ok(Consultation {
            text_parts,
            sources,
        })
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiConsultClient);

#[async_trait]
impl ConsultService for GeminiConsultClient {
    async fn consult(&self, request: &ConsultRequest) -> Result<Consultation> {
        let body = Self::build_request(request);
        let response: GenerateContentResponse = self.http.generate_content(&body).await?;
        Self::extract(response)
    }
}
