use super::client::OpenAiHttpClient;
use super::types::{ImageGenerationRequest, ImageGenerationResponse};
use crate::ai::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct OpenAiImageClient {
    http: OpenAiHttpClient,
    model: String,
}

impl OpenAiImageClient {
    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: OpenAiHttpClient::new(api_key, client, Duration::from_secs(60)),
            model,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    async fn generate_images(&self, prompt: &str, count: u32, size: &str) -> Result<Vec<String>> {
        tracing::debug!("Sending image generation request to OpenAI");

        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: count,
            size: size.to_string(),
        };

        let response: ImageGenerationResponse =
            self.http.post("/v1/images/generations", &request).await?;

        if response.data.is_empty() {
            return Err(Error::Provider(
                "No image data in OpenAI response".to_string(),
            ));
        }

        // Provider order is preserved; an item without a URL fails the whole
        // batch rather than returning a partial set.
        response
            .data
            .into_iter()
            .map(|item| {
                item.url
                    .ok_or_else(|| Error::Provider("Image item missing URL".to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> OpenAiImageClient {
        OpenAiImageClient::new_with_client(
            "test-key".to_string(),
            "gpt-image-1".to_string(),
            reqwest::Client::new(),
        )
        .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_generate_images_returns_urls_in_order() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(body_string_contains("\"n\":3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    { "url": "https://x/1.png" },
                    { "url": "https://x/2.png" },
                    { "url": "https://x/3.png" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let urls = client.generate_images("cat", 3, "512x512").await.unwrap();
        assert_eq!(
            urls,
            vec!["https://x/1.png", "https://x/2.png", "https://x/3.png"]
        );
    }

    #[tokio::test]
    async fn test_generate_images_empty_data_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .generate_images("cat", 1, "512x512")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }

    #[tokio::test]
    async fn test_generate_images_missing_url_fails_whole_batch() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "url": "https://x/1.png" }, { "b64_json": "abcd" }]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .generate_images("cat", 2, "512x512")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }

    #[tokio::test]
    async fn test_generate_images_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .generate_images("cat", 1, "512x512")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }
}
