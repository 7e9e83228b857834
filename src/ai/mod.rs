//! AI provider integration for text and image generation
//!
//! Provides interfaces to the upstream provider's chat-completion and
//! image-generation endpoints, plus mock implementations for tests.

pub mod mock;
pub mod openai;

pub use mock::{MockImageClient, MockTextClient};
pub use openai::{OpenAiImageClient, OpenAiTextClient};

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Generate a completion for a single-turn user prompt.
    async fn generate_text(&self, prompt: &str, temperature: f32, max_tokens: u32)
        -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate `count` images and return their URLs in provider order.
    async fn generate_images(&self, prompt: &str, count: u32, size: &str) -> Result<Vec<String>>;
}
