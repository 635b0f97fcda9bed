// src/services/llm_service.rs
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::errors::AssetGenError;
use crate::models::BrandContext;
use crate::prompts::{vision_system_instruction, vision_user_text};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const IMAGE_GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";

const VISION_MODEL: &str = "gpt-4o";
const GENERATION_MODEL: &str = "dall-e-3";

/// Seam to the external model-serving API. One implementation talks to
/// OpenAI; tests substitute mocks with call counters.
#[async_trait]
pub trait ModelApi: Send + Sync {
    /// Whether an API credential was configured at startup.
    fn is_configured(&self) -> bool;

    /// Describe the uploaded image (as a base64 data URI) in the context of
    /// the brand. An empty description is a valid outcome; transport or API
    /// errors are not.
    async fn describe_image(
        &self,
        image_data_uri: &str,
        brand: &BrandContext,
    ) -> Result<String, AssetGenError>;

    /// Generate one image for the prompt at the given canvas size and return
    /// its hosted URL.
    async fn generate_image(&self, prompt: &str, size: &str) -> Result<String, AssetGenError>;
}

pub struct OpenAiService {
    api_key: Option<String>,
    client: Client,
}

impl OpenAiService {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }

    fn key(&self) -> Result<&str, AssetGenError> {
        self.api_key.as_deref().ok_or(AssetGenError::MissingApiKey)
    }
}

#[async_trait]
impl ModelApi for OpenAiService {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn describe_image(
        &self,
        image_data_uri: &str,
        brand: &BrandContext,
    ) -> Result<String, AssetGenError> {
        let key = self.key()?;

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", key))
            .json(&json!({
                "model": VISION_MODEL,
                "messages": [
                    {
                        "role": "system",
                        "content": vision_system_instruction()
                    },
                    {
                        "role": "user",
                        "content": [
                            {
                                "type": "text",
                                "text": vision_user_text(brand)
                            },
                            {
                                "type": "image_url",
                                "image_url": {
                                    "url": image_data_uri
                                }
                            }
                        ]
                    }
                ],
                "max_tokens": 500
            }))
            .send()
            .await
            .map_err(|e| AssetGenError::Model(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AssetGenError::Model(format!("OpenAI error: {}", error_text)));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AssetGenError::Model(format!("Failed to parse OpenAI response: {}", e)))?;

        // Missing content degrades to an empty description slot downstream.
        Ok(result["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string())
    }

    async fn generate_image(&self, prompt: &str, size: &str) -> Result<String, AssetGenError> {
        let key = self.key()?;

        let response = self
            .client
            .post(IMAGE_GENERATIONS_URL)
            .header("Authorization", format!("Bearer {}", key))
            .json(&json!({
                "model": GENERATION_MODEL,
                "prompt": prompt,
                "n": 1,
                "size": size,
                "quality": "hd",
                "style": "natural"
            }))
            .send()
            .await
            .map_err(|e| AssetGenError::Model(format!("Image generation request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AssetGenError::Model(format!(
                "Image generation error: {}",
                error_text
            )));
        }

        let result: serde_json::Value = response.json().await.map_err(|e| {
            AssetGenError::Model(format!("Failed to parse generation response: {}", e))
        })?;

        result["data"][0]["url"]
            .as_str()
            .map(|url| url.to_string())
            .ok_or_else(|| AssetGenError::Model("OpenAI did not return an image URL.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_service_fails_before_any_call() {
        let service = OpenAiService::new(None);
        assert!(!service.is_configured());

        let brand = BrandContext {
            brand_name: "Acme".to_string(),
            colors: vec!["#112233".to_string()],
            mood: "bold".to_string(),
        };
        let err = service
            .describe_image("data:image/png;base64,AAAA", &brand)
            .await
            .unwrap_err();
        assert!(matches!(err, AssetGenError::MissingApiKey));

        let err = service.generate_image("prompt", "1792x1024").await.unwrap_err();
        assert!(matches!(err, AssetGenError::MissingApiKey));
    }

    #[test]
    fn configured_service_reports_so() {
        let service = OpenAiService::new(Some("sk-test".to_string()));
        assert!(service.is_configured());
    }
}
