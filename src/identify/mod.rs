//! 植物判定 - 画像をモデルへ送り、回答を植物情報に変換

mod prompt;

pub use prompt::IDENTIFY_PROMPT;

use crate::parser::PlantInfo;
use crate::vision::{InlineImage, VisionError, VisionModel};
use std::sync::Arc;

/// 植物判定の失敗
#[derive(Debug, thiserror::Error)]
pub enum IdentifyError {
    /// 画像が渡されなかった
    #[error("No image provided")]
    MissingInput,
    /// モデル呼び出しが失敗した
    #[error("モデル呼び出しに失敗: {0}")]
    UpstreamFailure(#[source] VisionError),
}

/// 画像から植物情報を得る
#[derive(Clone)]
pub struct Identifier {
    model: Arc<dyn VisionModel>,
}

impl Identifier {
    /// モデルを指定して作成
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self { model }
    }

    /// 画像を判定
    ///
    /// 画像が無い（または空の）場合はモデルを呼ばずに [`IdentifyError::MissingInput`]。
    /// モデル呼び出しは1回だけで、リトライはしない。
    pub async fn identify(&self, image: Option<InlineImage>) -> Result<PlantInfo, IdentifyError> {
        let image = image
            .filter(|image| !image.data.is_empty())
            .ok_or(IdentifyError::MissingInput)?;

        let text = self
            .model
            .generate(IDENTIFY_PROMPT, &image)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "植物判定のモデル呼び出しに失敗");
                IdentifyError::UpstreamFailure(err)
            })?;

        let info = PlantInfo::parse(&text);
        tracing::info!(
            common_name = %info.common_name,
            found = info.found_count(),
            "植物判定完了"
        );

        Ok(info)
    }
}
