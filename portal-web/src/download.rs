//! Browser downloads through a temporary `<a download>` element.

use tracing::error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Ask the browser to save `url` as `file_name`.
pub fn download(url: &str, file_name: &str) {
    if let Err(err) = try_download(url, file_name) {
        error!(url, file_name, error = ?err, "download failed");
    }
}

fn try_download(url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(url);
    link.set_download(file_name);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_children() -> u32 {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .map(|body| body.child_element_count())
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn download_removes_its_anchor() {
        let before = body_children();

        assert!(try_download("data:text/plain,bcb", "note.txt").is_ok());
        assert_eq!(body_children(), before);
    }
}
