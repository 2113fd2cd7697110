//! Configuration for the `showCoord` handler.
//!
//! Keys use the camelCase property names of the hosting application, so a
//! bundle configuration can be loaded as-is from YAML or JSON.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use coord_common::{
    AxisBounds, AxisInterpretation, Locale, MessageCatalog, ReferenceSystemPolicy,
    ReferenceSystemTable, Wkid,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

/// Handler configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlCoordinatesConfig {
    /// Accept decorated input such as `(x: 52.0°)` or `WKID: 4326`.
    pub verbose_input: bool,

    /// Run the number and range checks before building the point.
    pub validate_input: bool,

    /// Mirror every failure to the feedback logger.
    pub enable_logger_feedback: bool,

    /// Draw a highlight marker at the new center.
    pub highlight_center: bool,

    /// Substitute `defaultWKID` when the tuple has no reference system.
    pub use_default_wkid: bool,

    #[serde(rename = "defaultWKID")]
    pub default_wkid: Wkid,

    /// Symbol descriptor handed to the highlighter.
    pub highlighter_symbol: Option<serde_json::Value>,

    /// Highlight lifetime in milliseconds.
    pub highlighter_timeout: Option<u64>,

    /// Upper bound for the reprojection call in milliseconds.
    pub transform_timeout_ms: Option<u64>,

    /// Upper bound for waiting on the map view in milliseconds.
    pub view_timeout_ms: Option<u64>,

    pub locale: Locale,

    /// Additional or replacement entries for the reference system table.
    pub reference_systems: Vec<ReferenceSystemEntry>,
}

impl Default for UrlCoordinatesConfig {
    fn default() -> Self {
        Self {
            verbose_input: true,
            validate_input: true,
            enable_logger_feedback: false,
            highlight_center: true,
            use_default_wkid: true,
            default_wkid: Wkid::WGS84,
            highlighter_symbol: None,
            highlighter_timeout: None,
            transform_timeout_ms: None,
            view_timeout_ms: None,
            locale: Locale::En,
            reference_systems: Vec::new(),
        }
    }
}

/// A reference system declared in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSystemEntry {
    pub wkid: Wkid,
    /// `[min, max]` for axis0
    pub axis0: [f64; 2],
    /// `[min, max]` for axis1
    pub axis1: [f64; 2],
    #[serde(default)]
    pub interpretation: AxisInterpretation,
}

impl ReferenceSystemEntry {
    pub fn policy(&self) -> ReferenceSystemPolicy {
        ReferenceSystemPolicy::new(
            AxisBounds::new(self.axis0[0], self.axis0[1], self.axis1[0], self.axis1[1]),
            self.interpretation,
        )
    }
}

impl UrlCoordinatesConfig {
    /// Parse a configuration from YAML (JSON is accepted as well).
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: UrlCoordinatesConfig =
            serde_yaml::from_str(content).context("Failed to parse showCoord configuration")?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(
            path = %path.display(),
            extra_reference_systems = config.reference_systems.len(),
            "Loaded showCoord configuration"
        );
        Ok(config)
    }

    /// Built-in table merged with the configured entries.
    pub fn reference_system_table(&self) -> ReferenceSystemTable {
        let mut table = ReferenceSystemTable::default();
        table.extend(
            self.reference_systems
                .iter()
                .map(|entry| (entry.wkid, entry.policy())),
        );
        table
    }

    pub fn catalog(&self) -> MessageCatalog {
        MessageCatalog::for_locale(self.locale)
    }

    pub fn highlighter_timeout(&self) -> Option<Duration> {
        self.highlighter_timeout.map(Duration::from_millis)
    }

    pub fn transform_timeout(&self) -> Option<Duration> {
        self.transform_timeout_ms.map(Duration::from_millis)
    }

    pub fn view_timeout(&self) -> Option<Duration> {
        self.view_timeout_ms.map(Duration::from_millis)
    }
}

/// Configuration shared with the host so it can change between decode and apply.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<UrlCoordinatesConfig>>,
}

impl SharedConfig {
    pub fn new(config: UrlCoordinatesConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the configuration as it is right now.
    pub async fn snapshot(&self) -> UrlCoordinatesConfig {
        self.inner.read().await.clone()
    }

    /// Replace the configuration.
    pub async fn replace(&self, config: UrlCoordinatesConfig) {
        *self.inner.write().await = config;
    }

    /// Change the configuration in place.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut UrlCoordinatesConfig),
    {
        let mut guard = self.inner.write().await;
        f(&mut guard);
    }
}

impl From<UrlCoordinatesConfig> for SharedConfig {
    fn from(config: UrlCoordinatesConfig) -> Self {
        Self::new(config)
    }
}
