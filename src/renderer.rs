//! The home page renderer.
//!
//! A render is one stateless pass: read both assets, encode them, assemble
//! every fragment, then emit. Nothing reaches the sink until all of the
//! fallible work has succeeded, so a failed render leaves no partial output.

use crate::assets::{AssetSource, EncodedAsset, FsAssetSource};
use crate::page::{document, HomePage};
use crate::sink::MarkupSink;
use crate::{RenderConfig, Result};

/// The two encoded assets the hero embeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAssets {
    pub logo: EncodedAsset,
    pub demo: EncodedAsset,
}

/// Renders the home page from a configured asset source
#[derive(Debug, Clone)]
pub struct HomePageRenderer<S = FsAssetSource> {
    config: RenderConfig,
    source: S,
}

impl HomePageRenderer<FsAssetSource> {
    /// Build a renderer that reads assets from `config.asset_dir`.
    pub fn new(config: RenderConfig) -> Result<Self> {
        let source = FsAssetSource::new(config.asset_dir.clone()).with_max_bytes(config.max_asset_bytes);
        Self::with_source(config, source)
    }
}

impl<S: AssetSource> HomePageRenderer<S> {
    /// Build a renderer over a caller-supplied asset source.
    pub fn with_source(config: RenderConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Read and encode the logo and demo assets.
    pub fn load_assets(&self) -> Result<PageAssets> {
        let logo = self.load_asset(&self.config.logo_file)?;
        let demo = self.load_asset(&self.config.demo_file)?;
        Ok(PageAssets { logo, demo })
    }

    fn load_asset(&self, name: &str) -> Result<EncodedAsset> {
        let bytes = self.source.read(name)?;
        let asset = EncodedAsset::encode(name, &bytes)?;
        log::debug!(
            "encoded {} as {} ({} -> {} bytes)",
            name,
            asset.media_type(),
            asset.source_len(),
            asset.payload().len()
        );
        Ok(asset)
    }

    /// Assemble the page without emitting it.
    pub fn render_page(&self) -> Result<HomePage> {
        let assets = self.load_assets()?;
        Ok(HomePage::assemble(&assets.logo, &assets.demo))
    }

    /// Render the page into `sink`: hero styling, hero, feature styling,
    /// feature grid, call to action.
    pub fn render<K: MarkupSink + ?Sized>(&self, sink: &mut K) -> Result<()> {
        let page = match self.render_page() {
            Ok(page) => page,
            Err(e) => {
                log::warn!("home page render failed: {}", e);
                return Err(e);
            }
        };
        page.emit(sink);
        Ok(())
    }

    /// Render the page fragments as one string.
    pub fn render_to_string(&self) -> Result<String> {
        Ok(self.render_page()?.to_markup())
    }

    /// Render the page as a standalone HTML document.
    pub fn render_document(&self) -> Result<String> {
        let page = self.render_page()?;
        Ok(self.document(&page))
    }

    /// Wrap an already assembled page in a document titled from the config.
    pub fn document(&self, page: &HomePage) -> String {
        document::wrap_document(&self.config.page_title, &page.to_markup())
    }
}
