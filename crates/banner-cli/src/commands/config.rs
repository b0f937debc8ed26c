use std::path::PathBuf;

use anyhow::{Context, Result};
use banner_core::config::BannerSettings;
use clap::Args;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write settings to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default settings file as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let settings = BannerSettings::default();
    let toml_str = toml::to_string_pretty(&settings)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        println!("Default settings saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
