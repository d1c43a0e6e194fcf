//! HTTPエラー応答

use crate::identify::IdentifyError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// ハンドラーが返すエラー
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `image` フィールドが無い
    #[error("No image provided")]
    MissingImage,
    /// 対応していない画像形式
    #[error("Only .jpg, .png, and .webp formats are supported.")]
    UnsupportedMediaType,
    /// 画像サイズ超過
    #[error("Max image size is {max_bytes} bytes.")]
    PayloadTooLarge { max_bytes: usize },
    /// 上記以外（マルチパートの読み取りやモデル呼び出しの失敗を含む）
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// 対応するステータスコード
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingImage => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<IdentifyError> for ApiError {
    fn from(err: IdentifyError) -> Self {
        match err {
            IdentifyError::MissingInput => ApiError::MissingImage,
            IdentifyError::UpstreamFailure(_) => ApiError::Internal,
        }
    }
}

/// エラー応答のボディ
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
