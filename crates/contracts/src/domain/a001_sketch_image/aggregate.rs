use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use thiserror::Error;

/// MIME-тип по умолчанию, если браузер не сообщил тип файла
pub const FALLBACK_MIME_TYPE: &str = "image/png";

/// Ошибки разбора изображения эскиза
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("Image payload is empty")]
    EmptyPayload,
}

/// Изображение эскиза, закодированное в base64
///
/// Payload лежит в `Arc`: клоны в состоянии и мемо не копируют мегабайты.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchImage {
    mime_type: String,
    data: Arc<str>,
}

impl SketchImage {
    /// Encode raw file bytes. An empty `mime_type` falls back to [`FALLBACK_MIME_TYPE`].
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::EmptyPayload);
        }
        Ok(Self {
            mime_type: normalize_mime(mime_type),
            data: Arc::from(STANDARD.encode(bytes)),
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload без префикса `data:`
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Data URL для `<img src=...>`
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Drop-zone filter: only `image/*` files are accepted
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

fn normalize_mime(mime_type: &str) -> String {
    let mime_type = mime_type.trim();
    if mime_type.is_empty() {
        FALLBACK_MIME_TYPE.to_string()
    } else {
        mime_type.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_base64() {
        let image = SketchImage::from_bytes("image/jpeg", b"sketch").unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");
        assert_eq!(image.data(), "c2tldGNo");
        assert_eq!(image.data_url(), "data:image/jpeg;base64,c2tldGNo");
    }

    #[test]
    fn test_from_bytes_without_mime_uses_fallback() {
        let image = SketchImage::from_bytes("", b"x").unwrap();
        assert_eq!(image.mime_type(), FALLBACK_MIME_TYPE);
    }

    #[test]
    fn test_from_bytes_rejects_empty_file() {
        assert_eq!(
            SketchImage::from_bytes("image/png", b""),
            Err(ImageError::EmptyPayload)
        );
    }

    #[test]
    fn test_clone_shares_payload() {
        let image = SketchImage::from_bytes("image/png", &[7u8; 4096]).unwrap();
        let copy = image.clone();
        assert_eq!(copy, image);
        assert!(std::ptr::eq(copy.data().as_ptr(), image.data().as_ptr()));
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }
}
