//! Clipboard writes through the browser Clipboard API.

use dioxus::prelude::*;

/// Fire-and-forget copy of `text` to the clipboard.
pub fn copy_text(text: &str) {
    let Ok(literal) = serde_json::to_string(text) else {
        return;
    };
    tracing::debug!(len = text.len(), "Copying to clipboard");
    let _ = document::eval(&format!(
        "if (navigator.clipboard) {{ navigator.clipboard.writeText({literal}); }}"
    ));
}
