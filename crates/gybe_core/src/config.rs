//! Render configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TranspileResult;

/// Environment variable that forces the leading `---` marker on or off.
pub const EXPLICIT_DOCUMENT_START_ENV: &str = "GYBE_EXPLICIT_DOCUMENT_START";

/// Options controlling how manifests are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix the first document with `---`
    pub explicit_document_start: bool,
    /// Comment emitted before the first document, one `#` line per text line
    pub header: Option<String>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn explicit_document_start(mut self, enabled: bool) -> Self {
        self.explicit_document_start = enabled;
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> TranspileResult<Self> {
        let config: RenderConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> TranspileResult<Self> {
        debug!("Loading render config from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        let value = std::env::var(EXPLICIT_DOCUMENT_START_ENV).ok();
        self.apply_document_start_override(value.as_deref())
    }

    fn apply_document_start_override(mut self, value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None => {}
            Some("1") | Some("true") => self.explicit_document_start = true,
            Some("0") | Some("false") => self.explicit_document_start = false,
            Some(other) => warn!(
                "Ignoring {}={:?}, expected 1, 0, true or false",
                EXPLICIT_DOCUMENT_START_ENV, other
            ),
        }
        self
    }
}
