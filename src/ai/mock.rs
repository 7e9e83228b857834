use super::{ImageGenerationService, TextGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock text generation client with queued responses and call counting.
#[derive(Clone)]
pub struct MockTextClient {
    responses: Arc<Mutex<Vec<String>>>,
    error: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTextClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_text_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Make every call fail with a provider error carrying this message.
    pub fn with_error(self, message: String) -> Self {
        *self.error.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockTextClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationService for MockTextClient {
    async fn generate_text(
        &self,
        prompt: &str,
        _temperature: f32,
        _max_tokens: u32,
    ) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(Error::Provider(message));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!("Generated text for: {}", prompt))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

/// Mock image generation client. Records the last requested count and size so
/// tests can assert on the outbound call.
#[derive(Clone)]
pub struct MockImageClient {
    responses: Arc<Mutex<Vec<Vec<String>>>>,
    error: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<(u32, String)>>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_image_response(self, urls: Vec<String>) -> Self {
        self.responses.lock().unwrap().push(urls);
        self
    }

    pub fn with_error(self, message: String) -> Self {
        *self.error.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The `(count, size)` pair of the most recent call, if any.
    pub fn last_request(&self) -> Option<(u32, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_images(&self, _prompt: &str, count: u32, size: &str) -> Result<Vec<String>> {
        let mut call_count = self.call_count.lock().unwrap();
        *call_count += 1;
        *self.last_request.lock().unwrap() = Some((count, size.to_string()));

        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(Error::Provider(message));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // One placeholder URL per requested image
            Ok((1..=count)
                .map(|i| format!("https://images.test/{}.png", i))
                .collect())
        } else {
            let index = (*call_count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_text_client_default_response() {
        let client = MockTextClient::new();
        let text = client.generate_text("apples", 0.7, 500).await.unwrap();
        assert!(text.contains("apples"));
    }

    #[tokio::test]
    async fn test_mock_text_client_cycles_custom_responses() {
        let client = MockTextClient::new()
            .with_text_response("first".to_string())
            .with_text_response("second".to_string());

        assert_eq!(client.generate_text("x", 0.7, 500).await.unwrap(), "first");
        assert_eq!(client.generate_text("x", 0.7, 500).await.unwrap(), "second");
        // Should cycle back
        assert_eq!(client.generate_text("x", 0.7, 500).await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_mock_image_client_records_request() {
        let client = MockImageClient::new();
        let urls = client.generate_images("cat", 3, "256x256").await.unwrap();
        assert_eq!(urls.len(), 3);
        assert_eq!(client.last_request(), Some((3, "256x256".to_string())));
        assert_eq!(client.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_clients_error_injection() {
        let text = MockTextClient::new().with_error("boom".to_string());
        assert!(matches!(
            text.generate_text("x", 0.7, 500).await.unwrap_err(),
            Error::Provider(_)
        ));

        let image = MockImageClient::new().with_error("boom".to_string());
        assert!(matches!(
            image.generate_images("x", 1, "512x512").await.unwrap_err(),
            Error::Provider(_)
        ));
        assert_eq!(image.get_call_count(), 1);
    }
}
