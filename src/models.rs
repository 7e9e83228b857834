//! Data models and structures
//!
//! Defines the request/response shapes for the HTTP API and the
//! environment-driven configuration.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/text`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_length: Option<u32>,
}

/// Successful response of `POST /api/text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

/// Body of `POST /api/image`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub prompt: String,
    pub count: Option<u32>,
    pub size: Option<String>,
}

/// Successful response of `POST /api/image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub images: Vec<String>,
}

/// Error body returned on both 400 and 500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Per-request parameter defaults, applied when the caller omits a field.
#[derive(Debug, Clone)]
pub struct GenerationDefaults {
    pub temperature: f32,
    pub max_length: u32,
    pub image_count: u32,
    pub image_size: String,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_length: 500,
            image_count: 1,
            image_size: "512x512".to_string(),
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| crate::Error::Config(format!("Invalid PORT value: {}", raw)))?,
            Err(_) => 5000,
        };

        Ok(Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .map_err(|_| crate::Error::Config("OPENAI_API_KEY not set".to_string()))?,
            text_model: std::env::var("TEXT_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            image_model: std::env::var("IMAGE_MODEL")
                .unwrap_or_else(|_| "gpt-image-1".to_string()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_deserializes_with_options() {
        let request: TextRequest =
            serde_json::from_str(r#"{"prompt":"hello","temperature":0.2,"max_length":50}"#)
                .unwrap();
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.max_length, Some(50));
    }

    #[test]
    fn test_text_request_prompt_defaults_to_empty() {
        let request: TextRequest = serde_json::from_str("{}").unwrap();
        assert!(request.prompt.is_empty());
        assert!(request.temperature.is_none());
    }

    #[test]
    fn test_image_request_optional_fields() {
        let request: ImageRequest = serde_json::from_str(r#"{"prompt":"cat"}"#).unwrap();
        assert_eq!(request.prompt, "cat");
        assert!(request.count.is_none());
        assert!(request.size.is_none());
    }

    #[test]
    fn test_generation_defaults() {
        let defaults = GenerationDefaults::default();
        assert_eq!(defaults.temperature, 0.7);
        assert_eq!(defaults.max_length, 500);
        assert_eq!(defaults.image_count, 1);
        assert_eq!(defaults.image_size, "512x512");
    }
}
