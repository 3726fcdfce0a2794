use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: index.html plus the wasm/js bundle
    pub dist_dir: PathBuf,
    /// images and other static files not processed by Trunk
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Reads `PLANUP_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        Self::from_lookup(&workspace, |key| std::env::var(key).ok())
    }

    /// Anything unset falls back to a default rooted at `workspace`.
    pub fn from_lookup(workspace: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("PLANUP_HOST").unwrap_or_else(|| "127.0.0.1".into());

        let port = match lookup("PLANUP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PLANUP_PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };

        let dir = |key: &str, default: &str| {
            lookup(key)
                .map(PathBuf::from)
                .unwrap_or_else(|| workspace.join(default))
        };

        Ok(Self {
            host,
            port,
            dist_dir: dir("PLANUP_DIST_DIR", "dist"),
            assets_dir: dir("PLANUP_ASSETS_DIR", "assets"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<SiteConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(Path::new("/srv/planup"), |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/planup/dist"));
        assert_eq!(cfg.assets_dir, PathBuf::from("/srv/planup/assets"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let cfg = config(&[
            ("PLANUP_HOST", "0.0.0.0"),
            ("PLANUP_PORT", " 8080 "),
            ("PLANUP_DIST_DIR", "/var/www/planup"),
            ("PLANUP_ASSETS_DIR", "/var/www/assets"),
        ])
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/var/www/planup"));
        assert_eq!(cfg.assets_dir, PathBuf::from("/var/www/assets"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = config(&[("PLANUP_PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PLANUP_PORT must be a port number"));
    }

    #[test]
    fn out_of_range_port_is_an_error() {
        assert!(config(&[("PLANUP_PORT", "70000")]).is_err());
    }
}
