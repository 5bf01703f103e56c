//! Browser implementations of the platform collaborators

use wasm_bindgen::prelude::*;

use super::{Clipboard, ShareTarget};

// navigator.clipboard is not exposed by stable web-sys
#[wasm_bindgen(inline_js = "
    export function clipboard_write_text(text) {
        if (navigator.clipboard && navigator.clipboard.writeText) {
            navigator.clipboard.writeText(text).catch(e => console.warn('Clipboard write failed:', e));
            return true;
        }
        return false;
    }
")]
extern "C" {
    fn clipboard_write_text(text: &str) -> bool;
}

/// `navigator.clipboard`
#[derive(Debug, Default)]
pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    fn write_text(&mut self, text: &str) {
        if !clipboard_write_text(text) {
            log::warn!("Clipboard API unavailable");
        }
    }
}

/// Opens share URLs in a new tab
#[derive(Debug, Default)]
pub struct WindowShare;

impl ShareTarget for WindowShare {
    fn open(&mut self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Popup blocking is left to the browser
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}
