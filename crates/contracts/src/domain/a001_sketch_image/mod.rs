//! Sketch Image Domain Module
//!
//! Изображение эскиза в памяти: base64-payload плюс MIME-тип.
//! Никогда не сохраняется, живёт до очистки или замены.

pub mod aggregate;

pub use aggregate::{is_image_mime, ImageError, SketchImage, FALLBACK_MIME_TYPE};
