//! Asset loading and data-URI encoding.
//!
//! Assets are read through the [`AssetSource`] trait so the renderer can be
//! pointed at a directory on disk (the normal case) or at in-memory fixtures.
//! Each payload is sniffed for an image media type and base64-encoded with
//! the standard alphabet, padding included.

use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Media type used for SVG payloads, which `infer` does not report as images.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Default upper bound on a single asset's size (10 MiB).
pub const DEFAULT_MAX_ASSET_BYTES: u64 = 10 * 1024 * 1024;

/// Source of raw asset bytes, addressed by file name.
pub trait AssetSource {
    /// Read the full contents of the named asset.
    fn read(&self, name: &str) -> Result<Vec<u8>>;
}

/// Reads assets from a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    dir: PathBuf,
    max_bytes: u64,
}

impl FsAssetSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_bytes: DEFAULT_MAX_ASSET_BYTES,
        }
    }

    /// Override the per-asset size limit.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl AssetSource for FsAssetSource {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.dir.join(name);

        // Check size from metadata so oversized files are never pulled into memory.
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::AssetNotFound { path });
            }
            Err(e) => return Err(Error::AssetUnreadable { path, source: e }),
        };

        if !meta.is_file() {
            return Err(Error::AssetUnreadable {
                path,
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }

        if meta.len() > self.max_bytes {
            return Err(Error::AssetTooLarge {
                path,
                size: meta.len(),
                limit: self.max_bytes,
            });
        }

        let bytes = fs::read(&path).map_err(|e| Error::AssetUnreadable {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("loaded asset {} ({} bytes)", path.display(), bytes.len());
        Ok(bytes)
    }
}

/// A text-safe, inline-embeddable representation of an image asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    name: String,
    media_type: &'static str,
    source_len: usize,
    payload: String,
}

impl EncodedAsset {
    /// Encode raw asset bytes.
    ///
    /// Fails with [`Error::Encoding`] when the payload is empty or is not a
    /// recognisable image.
    pub fn encode(name: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::Encoding(format!("asset {} is empty", name)));
        }

        let media_type = detect_media_type(bytes).ok_or_else(|| {
            Error::Encoding(format!("asset {} is not a recognised image payload", name))
        })?;

        Ok(Self {
            name: name.to_string(),
            media_type,
            source_len: bytes.len(),
            payload: STANDARD.encode(bytes),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    /// Size of the unencoded asset in bytes.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// The base64 text, without the data-URI prefix.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// `data:<media-type>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.payload)
    }
}

/// Sniff an image media type from the payload's leading bytes.
///
/// Binary formats go through `infer`; SVG is accepted when the payload is
/// UTF-8 text containing an `<svg` element.
pub fn detect_media_type(bytes: &[u8]) -> Option<&'static str> {
    if let Some(kind) = infer::get(bytes) {
        if matches!(kind.matcher_type(), infer::MatcherType::Image) {
            return Some(kind.mime_type());
        }
    }

    if looks_like_svg(bytes) {
        return Some(SVG_MEDIA_TYPE);
    }

    None
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes)
        .map(|text| text.contains("<svg"))
        .unwrap_or(false)
}
