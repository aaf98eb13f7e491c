//! `storeshot`: writes the Travly App Store screenshots.
//!
//! Takes no arguments. Output goes to the workspace `screenshots/`
//! directory, one subdirectory per display size.

use anyhow::Context;
use log::{error, info, warn};
use storeshot_render::{FontData, GeneratorConfig, generate_all};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Generating Travly App Store screenshots...");
    let config = GeneratorConfig::default();
    let font_data = FontData::load(&config.fonts);
    let fonts = font_data.book();

    let shots = generate_all(&config, &fonts)
        .inspect_err(|e| error!("generation failed: {e}"))
        .with_context(|| format!("writing screenshots under {}", config.output_base.display()))?;

    let skipped: usize = shots.iter().map(|s| s.diagnostics.len()).sum();
    if skipped > 0 {
        warn!("{skipped} element(s) were skipped to fit the layout");
    }
    info!("Done: {} screenshots written.", shots.len());
    Ok(())
}
