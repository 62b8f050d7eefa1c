/// Remove markdown code-fence markers (```` ```html ```` and ```` ``` ````) anywhere in
/// the model output and trim surrounding whitespace.
///
/// The result never contains three consecutive backticks, so the function is idempotent.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```html", "").replace("```", "").trim().to_string()
}
