//! Reading `<input type="file">` selections into memory.

use js_sys::Uint8Array;
use shared::models::UploadFile;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// First file selected in `input`, if any.
pub fn first_selected(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Read the whole of `file`.
///
/// # Errors
/// Returns the JavaScript error when the browser fails to read the file.
pub async fn read_file(file: &File) -> Result<UploadFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile::new(file.name(), file.type_(), bytes))
}
