//! Gemini API クライアント

use super::{InlineImage, VisionError, VisionModel};
use crate::config::GeminiConfig;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// Gemini APIクライアント
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: reqwest::Client,
}

impl GeminiClient {
    /// 新しいクライアントを作成
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// HTTPクライアントを指定して作成
    pub fn with_http_client(config: GeminiConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// generateContent エンドポイントのURL
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl VisionModel for GeminiClient {
    async fn generate(&self, prompt: &str, image: &InlineImage) -> Result<String, VisionError> {
        let request = GenerateContentRequest::new(prompt, image);

        tracing::debug!(
            model = %self.config.model,
            mime_type = %image.mime_type,
            bytes = image.data.len(),
            "Gemini APIへリクエスト送信"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Status { status, body });
        }

        let response: GenerateContentResponse = response.json().await?;
        response.text().ok_or(VisionError::EmptyResponse)
    }
}

// Gemini API リクエスト/レスポンス構造体

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn new(prompt: &str, image: &InlineImage) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: STANDARD.encode(&image.data),
                        },
                    },
                ],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// 最初の候補のテキストパートを連結
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
