//! Second Brain home page
//!
//! Renders the Second Brain marketing landing page: a hero banner, a grid of
//! feature cards and a call-to-action section. The brand logo and the product
//! demo image are read from an asset directory, base64-encoded and embedded
//! inline as data-URIs, so the page needs no further asset requests.
//!
//! Output goes to a [`MarkupSink`], the host's "inject this markup
//! unescaped" primitive. Any `FnMut(&str)` works as a sink, as do `String`
//! and `Vec<String>`.
//!
//! # Example
//!
//! ```no_run
//! use secondbrain_home::{HomePageRenderer, RenderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig {
//!     asset_dir: "assets".into(),
//!     ..Default::default()
//! };
//!
//! let renderer = HomePageRenderer::new(config)?;
//! let mut fragments: Vec<String> = Vec::new();
//! renderer.render(&mut fragments)?;
//! assert_eq!(fragments.len(), 5);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod assets;
pub mod error;
pub mod page;
pub mod renderer;
pub mod report;
pub mod sink;

// Minimal HTTP host serving the rendered document
#[cfg(feature = "serve")]
pub mod serve;

pub use assets::{AssetSource, EncodedAsset, FsAssetSource};
pub use error::{Error, Result};
pub use page::{Fragment, FragmentKind, HomePage};
pub use renderer::{HomePageRenderer, PageAssets};
pub use report::RenderReport;
pub use sink::MarkupSink;

/// Configuration for the home page renderer
///
/// The defaults match the standard asset bundle layout: an `assets/`
/// directory holding `brain.svg` (the brand logo) and `Demo.svg` (the
/// product demo image).
///
/// # Examples
///
/// ```
/// let cfg = secondbrain_home::RenderConfig::default();
/// assert_eq!(cfg.logo_file, "brain.svg");
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory the asset file names are resolved against
    pub asset_dir: PathBuf,
    /// File name of the brand logo
    pub logo_file: String,
    /// File name of the product demo image
    pub demo_file: String,
    /// Largest accepted asset, in bytes
    pub max_asset_bytes: u64,
    /// `<title>` used when the page is wrapped as a full document
    pub page_title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            logo_file: "brain.svg".to_string(),
            demo_file: "Demo.svg".to_string(),
            max_asset_bytes: assets::DEFAULT_MAX_ASSET_BYTES,
            page_title: "Inventory & Orders".to_string(),
        }
    }
}

impl RenderConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: RenderConfig = serde_json::from_str(&text).map_err(|e| {
            Error::ConfigError(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that asset names are plain file names and the size limit is usable.
    pub fn validate(&self) -> Result<()> {
        for (field, name) in [("logo_file", &self.logo_file), ("demo_file", &self.demo_file)] {
            if name.trim().is_empty() {
                return Err(Error::ConfigError(format!("{} must not be empty", field)));
            }
            if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
                return Err(Error::ConfigError(format!(
                    "{} must be a plain file name, got {:?}",
                    field, name
                )));
            }
        }
        if self.max_asset_bytes == 0 {
            return Err(Error::ConfigError("max_asset_bytes must be positive".into()));
        }
        Ok(())
    }
}

/// Render the home page into `sink` using a filesystem asset source.
pub fn render_home_page<K: MarkupSink + ?Sized>(config: RenderConfig, sink: &mut K) -> Result<()> {
    HomePageRenderer::new(config)?.render(sink)
}
