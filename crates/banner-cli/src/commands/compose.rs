use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use banner_core::compose::{compose_reported, ComposeRequest, ComposeStage, ProgressReporter};
use banner_core::filename::local_timestamp;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use super::shared::{SettingsArgs, TransformArgs};
use crate::summary::print_compose_summary;

#[derive(Args)]
pub struct ComposeArgs {
    /// Photo to place behind the template
    pub photo: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub transform: TransformArgs,

    /// Directory for the generated file (named after the event)
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Exact output path (overrides --out-dir and the generated name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Drives an indicatif spinner from compose stages.
struct SpinnerReporter {
    pb: ProgressBar,
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: ComposeStage) {
        self.pb.set_message(stage.to_string());
    }
}

pub fn run(args: &ComposeArgs) -> Result<()> {
    let resolved = args.settings.resolve()?;
    let params = args.transform.params()?;
    let photo = std::fs::read(&args.photo)
        .with_context(|| format!("Failed to read {}", args.photo.display()))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));
    let reporter = SpinnerReporter { pb };

    let request = ComposeRequest {
        photo: &photo,
        template: &resolved.template,
        params,
        event_name: resolved.event_name.as_deref(),
    };
    let result = compose_reported(&request, &resolved.config, local_timestamp(), &reporter);
    reporter.pb.finish_and_clear();
    let banner = result.with_context(|| format!("Failed to compose {}", args.photo.display()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.out_dir.join(&banner.filename));
    std::fs::write(&output, &banner.jpeg)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_compose_summary(&args.photo, &output, &params, &banner.geometry, &resolved.config);
    Ok(())
}
