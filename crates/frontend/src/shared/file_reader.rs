use contracts::domain::a001_sketch_image::SketchImage;
use wasm_bindgen_futures::JsFuture;

/// Читает выбранный файл и кодирует его в [`SketchImage`]
pub async fn read_sketch(file: web_sys::File) -> Result<SketchImage, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file {}: {:?}", file.name(), e))?;

    let bytes = js_sys::Uint8Array::new(&array_buffer).to_vec();
    SketchImage::from_bytes(&file.type_(), &bytes).map_err(|e| format!("{}: {}", file.name(), e))
}
