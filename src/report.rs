//! Render reports: a JSON-friendly summary of what a render produced.

use crate::assets::EncodedAsset;
use crate::page::{FragmentKind, HomePage};
use crate::renderer::PageAssets;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize)]
pub struct FragmentSummary {
    pub kind: FragmentKind,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetSummary {
    pub name: String,
    pub media_type: String,
    pub source_bytes: usize,
    pub encoded_len: usize,
}

impl From<&EncodedAsset> for AssetSummary {
    fn from(asset: &EncodedAsset) -> Self {
        Self {
            name: asset.name().to_string(),
            media_type: asset.media_type().to_string(),
            source_bytes: asset.source_len(),
            encoded_len: asset.payload().len(),
        }
    }
}

/// Summary of one render: fragments, assets, and a digest of the output
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub fragments: Vec<FragmentSummary>,
    pub assets: Vec<AssetSummary>,
    pub output_bytes: usize,
    /// Hex SHA-256 of the written output
    pub sha256: String,
}

impl RenderReport {
    pub fn new(assets: &PageAssets, page: &HomePage, output: &str) -> Self {
        Self {
            fragments: page
                .fragments()
                .iter()
                .map(|f| FragmentSummary {
                    kind: f.kind,
                    bytes: f.markup.len(),
                })
                .collect(),
            assets: vec![AssetSummary::from(&assets.logo), AssetSummary::from(&assets.demo)],
            output_bytes: output.len(),
            sha256: digest_hex(output),
        }
    }
}

/// Hex-encoded SHA-256 of the given markup.
pub fn digest_hex(markup: &str) -> String {
    hex::encode(Sha256::digest(markup.as_bytes()))
}
