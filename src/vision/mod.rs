//! 画像認識モデルとの通信

mod client;

pub use client::GeminiClient;

use async_trait::async_trait;

/// モデル呼び出しの失敗
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    /// 通信・デコードの失敗
    #[error("Gemini APIリクエストに失敗: {0}")]
    Request(#[from] reqwest::Error),
    /// 成功以外のステータス
    #[error("Gemini API エラー ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// 回答テキストが含まれていない
    #[error("Gemini APIの回答にテキストがありません")]
    EmptyResponse,
}

/// リクエストに埋め込む画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// 画像のバイト列
    pub data: Vec<u8>,
    /// MIMEタイプ (image/jpeg など)
    pub mime_type: String,
}

impl InlineImage {
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// プロンプトと画像からテキストを生成するモデル
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// 1回だけモデルを呼び出し、回答テキストをそのまま返す
    async fn generate(&self, prompt: &str, image: &InlineImage) -> Result<String, VisionError>;
}
