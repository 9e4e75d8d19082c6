//! Export actions over the processed generation result: clipboard copy,
//! plain-text download and printing. Best-effort browser plumbing; on the
//! server every action is a no-op.

#[cfg(feature = "hydrate")]
mod imp {
    use wasm_bindgen::JsCast;

    /// Copies text to the clipboard, falling back to a hidden textarea and
    /// `execCommand("copy")` when the async clipboard API is unavailable.
    pub fn copy_text(text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let clipboard = window.navigator().clipboard();
        if !clipboard.is_undefined() {
            let _ = clipboard.write_text(text);
            return;
        }

        fallback_copy(&window, text);
    }

    fn fallback_copy(window: &web_sys::Window, text: &str) {
        let Some(document) = window.document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(element) = document.create_element("textarea") else {
            return;
        };
        let Ok(textarea) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
            return;
        };
        textarea.set_value(text);
        if body.append_child(&textarea).is_ok() {
            textarea.select();
            let _ = document.exec_command("copy");
            let _ = body.remove_child(&textarea);
        }
    }

    /// Triggers a download of `text` as `{file_stem}.txt`.
    pub fn download_text(file_stem: &str, text: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(text));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/plain;charset=utf-8");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(&format!("{file_stem}.txt"));
                if body.append_child(&anchor).is_ok() {
                    anchor.click();
                    let _ = body.remove_child(&anchor);
                }
            }
        }

        let _ = web_sys::Url::revoke_object_url(&url);
    }

    /// Opens a minimal standalone document holding the sanitized HTML and
    /// hands it to the platform print dialog.
    pub fn print_html(title: &str, html: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(print_window)) = window.open() else {
            return;
        };
        let Some(document) = print_window.document() else {
            return;
        };
        document.set_title(title);
        if let Some(body) = document.body() {
            body.set_inner_html(html);
            let _ = print_window.print();
        }
    }
}

#[cfg(not(feature = "hydrate"))]
mod imp {
    pub fn copy_text(_text: &str) {}

    pub fn download_text(_file_stem: &str, _text: &str) {}

    pub fn print_html(_title: &str, _html: &str) {}
}

pub use imp::{copy_text, download_text, print_html};
