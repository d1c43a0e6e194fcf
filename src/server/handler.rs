//! リクエストハンドラー

use super::error::ApiError;
use super::upload::Upload;
use super::AppState;
use crate::parser::PlantInfo;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

/// 画像を受け取るフィールド名
pub const IMAGE_FIELD: &str = "image";

/// POST /api/identify
///
/// マルチパートの `image` フィールドの画像を判定し、7項目のJSONを返す。
pub async fn identify(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PlantInfo>, ApiError> {
    let upload = match multipart {
        Ok(multipart) => read_image_field(multipart, state.max_upload_bytes).await?,
        Err(rejection) => {
            tracing::error!(error = %rejection, "マルチパートとして読み取れないリクエスト");
            return Err(ApiError::Internal);
        }
    };

    let image = match upload {
        Some(upload) if !upload.data.is_empty() => Some(upload.validate(state.max_upload_bytes)?),
        _ => None,
    };

    let info = state.identifier.identify(image).await?;
    Ok(Json(info))
}

/// GET /api/health
pub async fn health() -> &'static str {
    "OK"
}

/// 最初の `image` フィールドを読み取る（他のフィールドは無視）
async fn read_image_field(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<Option<Upload>, ApiError> {
    let to_api_error = |err| multipart_error(err, max_bytes);

    while let Some(field) = multipart.next_field().await.map_err(to_api_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(to_api_error)?;

        tracing::debug!(
            content_type = ?content_type,
            bytes = data.len(),
            "画像を受信"
        );

        return Ok(Some(Upload {
            content_type,
            data: data.to_vec(),
        }));
    }

    Ok(None)
}

/// ボディ上限の超過は 413、それ以外の読み取り失敗は 500
fn multipart_error(err: MultipartError, max_bytes: usize) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(error = %err, "画像サイズが上限を超過");
        ApiError::PayloadTooLarge { max_bytes }
    } else {
        tracing::error!(error = %err, "マルチパートの読み取りに失敗");
        ApiError::Internal
    }
}
