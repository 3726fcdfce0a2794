use anyhow::Result;
use anyhow::anyhow;
use gloo_timers::callback::Timeout;
use leptos::logging::warn;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use super::{Viewport, anchor_from_hash, scroll_to_anchor};
use crate::config::ScrollConfig;

/// The live browser window.
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("window has no document"))?;
        Ok(Self { window, document })
    }
}

impl Viewport for BrowserViewport {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn page_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Offset scroll against the real page; failures are logged and skipped.
pub fn scroll_to(id: &str, cfg: &ScrollConfig) {
    match BrowserViewport::current() {
        Ok(viewport) => {
            scroll_to_anchor(&viewport, id, cfg);
        }
        Err(e) => warn!("anchor scroll to #{id} skipped: {e}"),
    }
}

/// Honours a `#fragment` once layout had `settle_delay_ms` to settle.
pub fn scroll_to_hash_later(hash: &str, cfg: ScrollConfig) {
    let Some(id) = anchor_from_hash(hash).map(str::to_owned) else {
        return;
    };

    Timeout::new(cfg.settle_delay_ms, move || scroll_to(&id, &cfg)).forget();
}
