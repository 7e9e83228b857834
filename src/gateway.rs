//! The Generation Gateway: validates a caller's request, forwards it to the
//! upstream provider, and normalizes the result.
//!
//! Each operation is one request/await/respond cycle with exactly two
//! terminal outcomes. The gateway holds no mutable state; concurrent calls
//! share only the provider clients' connection pool.

use crate::ai::{
    ImageGenerationService, OpenAiImageClient, OpenAiTextClient, TextGenerationService,
};
use crate::models::{Config, GenerationDefaults, ImageRequest, ImageResponse, TextRequest, TextResponse};
use crate::{Error, Result};
use tracing::{error, info};

pub struct Gateway {
    text: Box<dyn TextGenerationService>,
    images: Box<dyn ImageGenerationService>,
    defaults: GenerationDefaults,
}

/// Injectable service bundle used to construct [`Gateway`] in tests/harnesses.
pub struct GatewayServices {
    pub text: Box<dyn TextGenerationService>,
    pub images: Box<dyn ImageGenerationService>,
}

impl Gateway {
    /// Build a gateway from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: GatewayServices, defaults: GenerationDefaults) -> Self {
        Self {
            text: services.text,
            images: services.images,
            defaults,
        }
    }

    /// Construct a gateway backed by the OpenAI provider clients.
    pub fn from_config(config: &Config) -> Self {
        info!(
            "Text provider: OpenAI (model: {}); image provider: OpenAI (model: {})",
            config.text_model, config.image_model
        );

        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        let text = Box::new(OpenAiTextClient::new_with_client(
            config.openai_api_key.clone(),
            config.text_model.clone(),
            http_client.clone(),
        ));
        let images = Box::new(OpenAiImageClient::new_with_client(
            config.openai_api_key.clone(),
            config.image_model.clone(),
            http_client,
        ));

        Self::with_services(
            GatewayServices { text, images },
            GenerationDefaults::default(),
        )
    }

    /// Generate text for a single-turn prompt.
    pub async fn generate_text(&self, request: TextRequest) -> Result<TextResponse> {
        let prompt = validate_prompt(&request.prompt)?;
        let temperature = request.temperature.unwrap_or(self.defaults.temperature);
        let max_tokens = request.max_length.unwrap_or(self.defaults.max_length);

        let text = self
            .text
            .generate_text(prompt, temperature, max_tokens)
            .await
            .map_err(|e| {
                error!("Text generation failed: {}", e);
                e
            })?;

        Ok(TextResponse { text })
    }

    /// Generate a batch of images and return their URLs in provider order.
    pub async fn generate_images(&self, request: ImageRequest) -> Result<ImageResponse> {
        let prompt = validate_prompt(&request.prompt)?;

        let count = request.count.unwrap_or(self.defaults.image_count);
        if count == 0 {
            return Err(Error::InvalidRequest(
                "Image count must be a positive integer".to_string(),
            ));
        }
        let size = request
            .size
            .unwrap_or_else(|| self.defaults.image_size.clone());

        let images = self
            .images
            .generate_images(prompt, count, &size)
            .await
            .map_err(|e| {
                error!("Image generation failed: {}", e);
                e
            })?;

        Ok(ImageResponse { images })
    }
}

fn validate_prompt(prompt: &str) -> Result<&str> {
    if prompt.trim().is_empty() {
        return Err(Error::InvalidRequest("No prompt provided".to_string()));
    }
    Ok(prompt)
}
