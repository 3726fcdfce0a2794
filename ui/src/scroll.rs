use crate::config::ScrollConfig;

#[cfg(feature = "web")]
pub mod browser;

/// What the anchor scroll needs from the page it runs in.
pub trait Viewport {
    /// Top edge of the element with `id`, relative to the visible viewport.
    fn anchor_top(&self, id: &str) -> Option<f64>;
    /// How far the document is currently scrolled down.
    fn page_offset(&self) -> f64;
    /// Starts a smooth scroll to the absolute document position `top`.
    fn smooth_scroll_to(&self, top: f64);
}

/// Document position that puts an element just below the fixed header.
pub fn scroll_target(element_top: f64, page_offset: f64, cfg: &ScrollConfig) -> f64 {
    element_top + page_offset - cfg.header_height - cfg.extra_gap
}

/// Scrolls so `id` lands below the header. A missing anchor is silently skipped.
///
/// Returns the position scrolled to.
pub fn scroll_to_anchor<V: Viewport + ?Sized>(
    viewport: &V,
    id: &str,
    cfg: &ScrollConfig,
) -> Option<f64> {
    let top = viewport.anchor_top(id)?;

    let target = scroll_target(top, viewport.page_offset(), cfg);
    viewport.smooth_scroll_to(target);
    Some(target)
}

/// `"#about"` -> `Some("about")`. Empty fragments carry no anchor.
pub fn anchor_from_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Fake page that records every scroll request.
    struct RecordingViewport {
        anchors: HashMap<&'static str, f64>,
        offset: f64,
        scrolls: RefCell<Vec<f64>>,
    }

    impl RecordingViewport {
        fn new(offset: f64, anchors: &[(&'static str, f64)]) -> Self {
            Self {
                anchors: anchors.iter().copied().collect(),
                offset,
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for RecordingViewport {
        fn anchor_top(&self, id: &str) -> Option<f64> {
            self.anchors.get(id).copied()
        }

        fn page_offset(&self) -> f64 {
            self.offset
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn target_subtracts_header_and_gap() {
        let cfg = ScrollConfig::default();
        assert_eq!(scroll_target(500.0, 1000.0, &cfg), 1376.0);
    }

    #[test]
    fn target_follows_injected_config() {
        let cfg = ScrollConfig {
            header_height: 164.0,
            extra_gap: 0.0,
            ..ScrollConfig::default()
        };
        assert_eq!(scroll_target(200.0, 0.0, &cfg), 36.0);
    }

    #[test]
    fn present_anchor_issues_exactly_one_scroll() {
        let vp = RecordingViewport::new(250.0, &[("skills", 900.0), ("about", 40.0)]);
        let cfg = ScrollConfig::default();

        let target = scroll_to_anchor(&vp, "skills", &cfg);

        assert_eq!(target, Some(900.0 + 250.0 - 124.0));
        assert_eq!(*vp.scrolls.borrow(), vec![1026.0]);
    }

    #[test]
    fn anchor_above_the_fold_can_scroll_upwards() {
        let vp = RecordingViewport::new(2000.0, &[("about", -600.0)]);
        let target = scroll_to_anchor(&vp, "about", &ScrollConfig::default());
        assert_eq!(target, Some(1276.0));
    }

    #[test]
    fn absent_anchor_does_not_scroll() {
        let vp = RecordingViewport::new(0.0, &[("about", 10.0)]);

        assert_eq!(scroll_to_anchor(&vp, "pricing", &ScrollConfig::default()), None);
        assert!(vp.scrolls.borrow().is_empty());
    }

    #[test]
    fn hash_parsing() {
        assert_eq!(anchor_from_hash("#about"), Some("about"));
        assert_eq!(anchor_from_hash("contact"), Some("contact"));
        assert_eq!(anchor_from_hash("#"), None);
        assert_eq!(anchor_from_hash(""), None);
    }
}
