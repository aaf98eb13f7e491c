//! Batch generation: every catalog entry at every resolution, written to disk.

use crate::compose::{render_png, render_screenshot};
use crate::error::{RenderError, Result};
use crate::text::{FontBook, FontPaths};
use std::path::{Path, PathBuf};
use storeshot_core::{LayoutDiagnostic, RESOLUTIONS, Resolution, SCREENSHOTS, output_path};

/// `screenshots/` at the workspace root, fixed at build time.
pub const DEFAULT_OUTPUT_BASE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../screenshots");

/// Generator configuration. [`Default`] gives the fixed production values.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory that receives one subdirectory per resolution label.
    pub output_base: PathBuf,
    pub fonts: FontPaths,
    pub resolutions: Vec<Resolution>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_base: PathBuf::from(DEFAULT_OUTPUT_BASE),
            fonts: FontPaths::default(),
            resolutions: RESOLUTIONS.to_vec(),
        }
    }
}

/// One written screenshot.
#[derive(Debug, Clone)]
pub struct GeneratedShot {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub diagnostics: Vec<LayoutDiagnostic>,
}

/// Render and write every screenshot, resolutions outer, catalog inner.
///
/// # Errors
/// Stops at the first directory, encoding, or write failure.
pub fn generate_all(config: &GeneratorConfig, fonts: &FontBook<'_>) -> Result<Vec<GeneratedShot>> {
    let mut shots = Vec::with_capacity(config.resolutions.len() * SCREENSHOTS.len());
    for resolution in &config.resolutions {
        log::info!(
            "{}\" display ({}x{})",
            resolution.label,
            resolution.width,
            resolution.height
        );
        for (index, spec) in SCREENSHOTS.iter().enumerate() {
            let rendered = render_screenshot(index, spec, resolution, fonts)?;
            let bytes = render_png(&rendered.canvas)?;
            let path = output_path(&config.output_base, resolution, index);
            write_file(&path, &bytes)?;
            log::info!(
                "saved {} ({}x{})",
                path.display(),
                resolution.width,
                resolution.height
            );
            shots.push(GeneratedShot {
                path,
                width: resolution.width,
                height: resolution.height,
                diagnostics: rendered.diagnostics,
            });
        }
    }
    Ok(shots)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| RenderError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, bytes).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}
