use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use banner_core::compose::{compose_at, ComposeRequest};
use banner_core::config::ComposeConfig;
use banner_core::filename::local_timestamp;
use banner_core::io::template::Template;
use banner_core::transform::TransformParams;
use chrono::NaiveDateTime;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;

use super::shared::{SettingsArgs, TransformArgs};

#[derive(Args)]
pub struct BatchArgs {
    /// Photos to compose
    #[arg(required = true)]
    pub photos: Vec<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub transform: TransformArgs,

    /// Output directory
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let resolved = args.settings.resolve()?;
    let params = args.transform.params()?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    // One timestamp for the whole batch; the photo stem keeps names apart.
    let timestamp = local_timestamp();

    let pb = ProgressBar::new(args.photos.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Composing [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let results: Vec<(PathBuf, Result<PathBuf>)> = args
        .photos
        .par_iter()
        .map(|photo| {
            let job = BatchJob {
                template: &resolved.template,
                event_name: resolved.event_name.as_deref(),
                params,
                config: &resolved.config,
                timestamp,
            };
            let result = job.run(photo, &args.out_dir);
            pb.inc(1);
            (photo.clone(), result)
        })
        .collect();
    pb.finish();

    let mut failed = 0usize;
    for (photo, result) in &results {
        match result {
            Ok(output) => println!("{} -> {}", photo.display(), output.display()),
            Err(e) => {
                failed += 1;
                warn!(photo = %photo.display(), "Composition failed");
                eprintln!("{}: {:#}", photo.display(), e);
            }
        }
    }

    println!("\n{} composed, {} failed", results.len() - failed, failed);
    if failed > 0 {
        anyhow::bail!("{failed} of {} photo(s) failed", results.len());
    }
    Ok(())
}

struct BatchJob<'a> {
    template: &'a Template,
    event_name: Option<&'a str>,
    params: TransformParams,
    config: &'a ComposeConfig,
    timestamp: NaiveDateTime,
}

impl BatchJob<'_> {
    fn run(&self, photo: &Path, out_dir: &Path) -> Result<PathBuf> {
        let bytes =
            std::fs::read(photo).with_context(|| format!("Failed to read {}", photo.display()))?;
        let request = ComposeRequest {
            photo: &bytes,
            template: self.template,
            params: self.params,
            event_name: self.event_name,
        };
        let banner = compose_at(&request, self.config, self.timestamp)?;
        let output = batch_output_path(out_dir, photo, &banner.filename);
        std::fs::write(&output, &banner.jpeg)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        Ok(output)
    }
}

/// Prefix the generated name with the photo's stem so a batch sharing one
/// timestamp does not overwrite itself.
fn batch_output_path(out_dir: &Path, photo: &Path, filename: &str) -> PathBuf {
    let stem = photo
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("photo");
    out_dir.join(format!("{stem}-{filename}"))
}
