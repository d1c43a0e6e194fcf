//! アップロード画像の検証

use super::error::ApiError;
use crate::vision::InlineImage;
use image::ImageFormat;

/// 受け付ける画像形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
    WebP,
}

impl ImageMime {
    /// MIMEタイプ文字列
    pub const fn as_str(self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
            ImageMime::WebP => "image/webp",
        }
    }

    /// Content-Type から判定 (パラメーターと大文字小文字は無視)
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageMime::Jpeg),
            "image/png" => Some(ImageMime::Png),
            "image/webp" => Some(ImageMime::WebP),
            _ => None,
        }
    }

    /// バイト列の先頭から判定
    pub fn sniff(data: &[u8]) -> Option<Self> {
        match image::guess_format(data).ok()? {
            ImageFormat::Jpeg => Some(ImageMime::Jpeg),
            ImageFormat::Png => Some(ImageMime::Png),
            ImageFormat::WebP => Some(ImageMime::WebP),
            _ => None,
        }
    }
}

/// マルチパートから受け取った画像
#[derive(Debug, Clone)]
pub struct Upload {
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Upload {
    /// 形式とサイズを検証してモデルに渡せる形にする
    ///
    /// Content-Type が無い、または汎用の値のときはバイト列から形式を推定する。
    pub fn validate(self, max_bytes: usize) -> Result<InlineImage, ApiError> {
        if self.data.len() > max_bytes {
            return Err(ApiError::PayloadTooLarge { max_bytes });
        }

        let declared = self
            .content_type
            .as_deref()
            .filter(|ct| !ct.is_empty() && !ct.starts_with("application/octet-stream"));

        let mime = match declared {
            Some(content_type) => ImageMime::from_content_type(content_type),
            None => ImageMime::sniff(&self.data),
        }
        .ok_or(ApiError::UnsupportedMediaType)?;

        Ok(InlineImage::new(self.data, mime.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff\xe0\0\x10JFIF\0";

    fn upload(content_type: Option<&str>, data: &[u8]) -> Upload {
        Upload {
            content_type: content_type.map(str::to_string),
            data: data.to_vec(),
        }
    }

    #[test]
    fn accepts_declared_types() {
        assert_eq!(ImageMime::from_content_type("image/png"), Some(ImageMime::Png));
        assert_eq!(ImageMime::from_content_type("IMAGE/JPEG"), Some(ImageMime::Jpeg));
        assert_eq!(
            ImageMime::from_content_type("image/webp; charset=binary"),
            Some(ImageMime::WebP)
        );
        assert_eq!(ImageMime::from_content_type("image/gif"), None);
    }

    #[test]
    fn sniffs_when_type_missing() {
        let image = upload(None, PNG_MAGIC).validate(1024).unwrap();
        assert_eq!(image.mime_type, "image/png");

        let image = upload(Some("application/octet-stream"), JPEG_MAGIC)
            .validate(1024)
            .unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn rejects_unsupported_types() {
        let err = upload(Some("image/gif"), b"GIF89a").validate(1024).unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMediaType));

        let err = upload(None, b"plain text").validate(1024).unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedMediaType));
    }

    #[test]
    fn rejects_oversized_images() {
        let err = upload(Some("image/png"), &[0u8; 11]).validate(10).unwrap_err();
        assert!(matches!(err, ApiError::PayloadTooLarge { max_bytes: 10 }));
    }
}
