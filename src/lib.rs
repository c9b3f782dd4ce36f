pub mod manifest;
#[cfg(feature = "cli")]
pub mod menu;
pub mod output;
pub mod recolor;
pub mod styles;

use std::path::Path;

use anyhow::Result;

use manifest::ManifestEntry;

/// Generate every color variant of a single SVG living in `dir`.
pub fn generate_variants(dir: &Path, file_name: &str) -> Result<Vec<ManifestEntry>> {
    recolor::generate_variants(dir, file_name)
}

/// Regenerate variants for every `-black` base SVG under `dir`.
pub fn generate_all(dir: &Path) -> Result<Vec<ManifestEntry>> {
    recolor::generate_all(dir)
}

/// Build the manifest for every recognized variant file under `dir`.
pub fn collect_manifest(dir: &Path) -> Result<Vec<ManifestEntry>> {
    manifest::collect(dir)
}
