use leptos::prelude::use_context;

/// Geometry of the fixed navigation bar, used to offset anchor scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// height of the fixed header in px
    pub header_height: f64,
    /// breathing room left between the header and the anchored section
    pub extra_gap: f64,
    /// how long the main page waits for layout before honouring `#anchor`
    pub settle_delay_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_height: 100.0,
            extra_gap: 24.0,
            settle_delay_ms: 300,
        }
    }
}

impl ScrollConfig {
    /// Total distance an anchor must stay below the top of the viewport.
    pub fn offset(&self) -> f64 {
        self.header_height + self.extra_gap
    }

    /// Reads the value provided by `App`, or the defaults outside of it.
    pub fn from_context() -> Self {
        use_context::<Self>().unwrap_or_default()
    }
}

/// External destinations the site links out to.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLinks {
    /// Plan Up itself. Both calls to action on the memo pitch open it.
    pub service_home: String,
    pub image_host: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            service_home: "https://3.104.198.251.nip.io/home".into(),
            image_host: "https://c.animaapp.com/kPFgkC5m/img".into(),
        }
    }
}

impl SiteLinks {
    pub fn from_context() -> Self {
        use_context::<Self>().unwrap_or_default()
    }

    /// Absolute URL of an image on the asset host.
    pub fn image(&self, file: &str) -> String {
        format!("{}/{}", self.image_host.trim_end_matches('/'), file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scroll_offset_is_header_plus_gap() {
        let cfg = ScrollConfig::default();
        assert_eq!(cfg.header_height, 100.0);
        assert_eq!(cfg.extra_gap, 24.0);
        assert_eq!(cfg.offset(), 124.0);
    }

    #[test]
    fn context_lookup_without_owner_falls_back_to_defaults() {
        assert_eq!(ScrollConfig::from_context(), ScrollConfig::default());
        assert_eq!(SiteLinks::from_context(), SiteLinks::default());
    }

    #[test]
    fn service_home_is_the_deployed_service() {
        assert_eq!(SiteLinks::default().service_home, "https://3.104.198.251.nip.io/home");
    }

    #[test]
    fn image_joins_host_and_file() {
        let links = SiteLinks {
            image_host: "https://cdn.example/img/".into(),
            ..SiteLinks::default()
        };
        assert_eq!(links.image("logo.png"), "https://cdn.example/img/logo.png");
    }
}
