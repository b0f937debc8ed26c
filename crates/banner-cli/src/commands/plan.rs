use std::path::PathBuf;

use anyhow::{Context, Result};
use banner_core::config::BannerSettings;
use banner_core::geometry::plan_geometry;
use banner_core::io::image_io::photo_dimensions;
use clap::Args;

use super::shared::TransformArgs;
use crate::summary::print_geometry;

#[derive(Args)]
pub struct PlanArgs {
    /// Photo to inspect
    pub photo: PathBuf,

    /// Settings file (TOML); only the compose options are used
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[command(flatten)]
    pub transform: TransformArgs,
}

pub fn run(args: &PlanArgs) -> Result<()> {
    let config = match args.settings {
        Some(ref path) => {
            BannerSettings::load(path)
                .with_context(|| format!("Failed to load settings {}", path.display()))?
                .compose
        }
        None => Default::default(),
    };
    let params = args.transform.params()?;

    let bytes = std::fs::read(&args.photo)
        .with_context(|| format!("Failed to read {}", args.photo.display()))?;
    let (width, height) = photo_dimensions(&bytes)
        .with_context(|| format!("Failed to read dimensions of {}", args.photo.display()))?;

    let geometry = plan_geometry(width, height, &params, &config)?;
    print_geometry(&args.photo, &params, &geometry, &config);
    Ok(())
}
