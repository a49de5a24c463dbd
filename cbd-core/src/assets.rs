//! Input file locations and the static documents embedded in pages.
//!
//! The map document and the images are opaque: the dashboard never looks
//! inside them. Each comes in two flavors, read from disk with `load` or
//! wrapped from build-time embedded bytes with `from_embedded`, so the WASM
//! app and native tests share the same missing-asset behavior.

use crate::error::{DashboardError, Result};
use base64::Engine;
use std::path::{Path, PathBuf};

/// Default file names of the dashboard inputs.
pub const TRIPS_FILE: &str = "reduced_data_to_plot_7.csv";
pub const TOP20_FILE: &str = "top20.csv";
pub const DUAL_AXIS_FILE: &str = "dual_axis.csv";
pub const MAP_FILE: &str = "CitiBike Bike Trips Aggregated.html";
pub const INTRO_IMAGE_FILE: &str = "OIP.jfif";
pub const RECOMMENDATIONS_IMAGE_FILE: &str = "Citibike_NYC_render_01.jpg";

/// Locations of every file the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub trips: PathBuf,
    pub top20: PathBuf,
    pub dual_axis: PathBuf,
    pub map: PathBuf,
    pub intro_image: PathBuf,
    pub recommendations_image: PathBuf,
}

impl AssetPaths {
    /// Default file names resolved against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            trips: dir.join(TRIPS_FILE),
            top20: dir.join(TOP20_FILE),
            dual_axis: dir.join(DUAL_AXIS_FILE),
            map: dir.join(MAP_FILE),
            intro_image: dir.join(INTRO_IMAGE_FILE),
            recommendations_image: dir.join(RECOMMENDATIONS_IMAGE_FILE),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::in_dir("")
    }
}

/// A pre-rendered HTML map, embedded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDocument {
    html: String,
}

impl MapDocument {
    /// Read the whole document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(html) => {
                log::info!("Loaded map document {} ({} bytes)", path.display(), html.len());
                Ok(Self { html })
            }
            Err(e) => {
                log::warn!("Cannot read map document {}: {}", path.display(), e);
                Err(DashboardError::MapAssetMissing {
                    path: path.to_path_buf(),
                })
            }
        }
    }

    /// Wrap a document embedded at build time; `None` means the file was absent.
    pub fn from_embedded(html: Option<&str>, path: impl AsRef<Path>) -> Result<Self> {
        html.map(|html| Self {
            html: html.to_string(),
        })
        .ok_or_else(|| DashboardError::MapAssetMissing {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// A static image shown on the intro and recommendations pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    bytes: Vec<u8>,
    mime: &'static str,
}

impl ImageAsset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(bytes) => Ok(Self {
                mime: mime_for(path),
                bytes,
            }),
            Err(e) => {
                log::warn!("Cannot read image {}: {}", path.display(), e);
                Err(DashboardError::ImageAssetMissing {
                    path: path.to_path_buf(),
                })
            }
        }
    }

    pub fn from_embedded(bytes: Option<&[u8]>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        bytes
            .map(|bytes| Self {
                bytes: bytes.to_vec(),
                mime: mime_for(path),
            })
            .ok_or_else(|| DashboardError::ImageAssetMissing {
                path: path.to_path_buf(),
            })
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Inline `data:` URL usable as an `img` source.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn asset_paths_use_default_names() {
        let paths = AssetPaths::in_dir("data");
        assert_eq!(paths.trips, Path::new("data").join("reduced_data_to_plot_7.csv"));
        assert_eq!(paths.top20, Path::new("data").join("top20.csv"));
        assert_eq!(paths.dual_axis, Path::new("data").join("dual_axis.csv"));
        assert_eq!(
            paths.map,
            Path::new("data").join("CitiBike Bike Trips Aggregated.html")
        );
    }

    #[test]
    fn map_document_is_read_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.html");
        let html = "<html><body><div id=\"map\"></div>\n</body></html>";
        fs::write(&path, html).unwrap();

        let doc = MapDocument::load(&path).unwrap();
        assert_eq!(doc.html(), html);
    }

    #[test]
    fn missing_map_document_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.html");

        let err = MapDocument::load(&path).unwrap_err();
        assert_eq!(err, DashboardError::MapAssetMissing { path });
    }

    #[test]
    fn embedded_map_document() {
        let doc = MapDocument::from_embedded(Some("<p>map</p>"), "map.html").unwrap();
        assert_eq!(doc.html(), "<p>map</p>");

        let err = MapDocument::from_embedded(None, "map.html").unwrap_err();
        assert!(matches!(err, DashboardError::MapAssetMissing { .. }));
    }

    #[test]
    fn image_data_url() {
        let image = ImageAsset::from_embedded(Some(&[0xFF, 0xD8, 0xFF]), "photo.jfif").unwrap();
        assert_eq!(image.mime(), "image/jpeg");
        assert_eq!(image.data_url(), "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn missing_image_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.png");
        let err = ImageAsset::load(&path).unwrap_err();
        assert_eq!(err, DashboardError::ImageAssetMissing { path });

        let err = ImageAsset::from_embedded(None, "absent.png").unwrap_err();
        assert!(matches!(err, DashboardError::ImageAssetMissing { .. }));
    }

    #[test]
    fn image_loaded_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("render.PNG");
        fs::write(&path, [1u8, 2, 3]).unwrap();
        let image = ImageAsset::load(&path).unwrap();
        assert_eq!(image.mime(), "image/png");
    }
}
