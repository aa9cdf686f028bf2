use super::{
    ConsultRequest, ConsultService, Consultation, GeneratedImage, ImageGenRequest, ImageGenService,
    ImageGeneration,
};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockConsultClient {
    responses: Arc<Mutex<Vec<Consultation>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockConsultClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_consultation(self, consultation: Consultation) -> Self {
        self.responses.lock().unwrap().push(consultation);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockConsultClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConsultService for MockConsultClient {
    async fn consult(&self, request: &ConsultRequest) -> Result<Consultation> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(Consultation {
                text_parts: vec![format!("Mock answer to: {}", request.question)],
                sources: None,
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[derive(Clone)]
pub struct MockImageGenClient {
    responses: Arc<Mutex<Vec<ImageGeneration>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageGenClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_generation(self, generation: ImageGeneration) -> Self {
        self.responses.lock().unwrap().push(generation);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageGenClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenService for MockImageGenClient {
    async fn generate(&self, _request: &ImageGenRequest) -> Result<ImageGeneration> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Return a tiny valid PNG as default
            Ok(ImageGeneration {
                images: vec![GeneratedImage {
                    bytes: vec![
                        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
                        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
                        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
                        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00,
                        0x0C, 0x49, 0x44, 0x41, // IDAT chunk
                        0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00,
                        0x01, 0xE2, 0x25, 0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45,
                        0x4E, // IEND chunk
                        0x44, 0xAE, 0x42, 0x60, 0x82,
                    ],
                    mime_type: "image/png".to_string(),
                }],
                commentary: Vec::new(),
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{AspectRatio, ImageSize, MediaResolution, ThinkingLevel};

    fn consult_request(question: &str) -> ConsultRequest {
        ConsultRequest {
            attachments: Vec::new(),
            question: question.to_string(),
            thinking: ThinkingLevel::High,
            media_resolution: MediaResolution::Medium,
            search_grounding: false,
        }
    }

    fn image_request(prompt: &str) -> ImageGenRequest {
        ImageGenRequest {
            references: Vec::new(),
            prompt: prompt.to_string(),
            aspect_ratio: AspectRatio::R1x1,
            size: ImageSize::K1,
        }
    }

    #[tokio::test]
    async fn test_mock_consult_default_response_echoes_question() {
        let client = MockConsultClient::new();

        let consultation = client.consult(&consult_request("why is the sky blue?")).await.unwrap();
        assert_eq!(
            consultation.text_parts,
            vec!["Mock answer to: why is the sky blue?"]
        );
        assert_eq!(consultation.sources, None);
    }

    #[tokio::test]
    async fn test_mock_consult_custom_responses_cycle() {
        let client = MockConsultClient::new()
            .with_consultation(Consultation {
                text_parts: vec!["first".to_string()],
                sources: None,
            })
            .with_consultation(Consultation {
                text_parts: vec!["second".to_string()],
                sources: None,
            });

        let request = consult_request("q");
        assert_eq!(
            client.consult(&request).await.unwrap().text_parts,
            vec!["first"]
        );
        assert_eq!(
            client.consult(&request).await.unwrap().text_parts,
            vec!["second"]
        );

        // Should cycle back
        assert_eq!(
            client.consult(&request).await.unwrap().text_parts,
            vec!["first"]
        );
    }

    #[tokio::test]
    async fn test_mock_call_counts() {
        let consult = MockConsultClient::new();
        let image_gen = MockImageGenClient::new();

        assert_eq!(consult.get_call_count(), 0);
        assert_eq!(image_gen.get_call_count(), 0);

        consult.consult(&consult_request("q")).await.unwrap();
        consult.consult(&consult_request("q")).await.unwrap();
        image_gen.generate(&image_request("p")).await.unwrap();

        assert_eq!(consult.get_call_count(), 2);
        assert_eq!(image_gen.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_image_default_is_valid_png() {
        let client = MockImageGenClient::new();

        let generation = client.generate(&image_request("p")).await.unwrap();
        assert_eq!(generation.images.len(), 1);
        assert_eq!(generation.images[0].mime_type, "image/png");
        assert!(generation.images[0]
            .bytes
            .starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }
}
