use std::path::PathBuf;

use anyhow::{Context, Result};
use banner_core::config::{BannerSettings, ComposeConfig};
use banner_core::io::template::Template;
use banner_core::transform::TransformParams;
use clap::Args;

/// Where the template and event name come from.
#[derive(Args)]
pub struct SettingsArgs {
    /// Settings file (TOML) with template path, event name and compose options
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Template PNG (overrides the settings file)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Event name used for the output filename (overrides the settings file)
    #[arg(long)]
    pub event_name: Option<String>,
}

/// Placement exactly as the preview UI submits it.
#[derive(Args)]
pub struct TransformArgs {
    /// Zoom factor (1.0 = photo just covers the canvas)
    #[arg(long)]
    pub scale: Option<String>,

    /// Horizontal drag offset in preview pixels (+ = right)
    #[arg(long, allow_hyphen_values = true)]
    pub x_offset: Option<String>,

    /// Vertical drag offset in preview pixels (+ = down)
    #[arg(long, allow_hyphen_values = true)]
    pub y_offset: Option<String>,
}

impl TransformArgs {
    pub fn params(&self) -> Result<TransformParams> {
        let params = TransformParams::parse(
            self.scale.as_deref(),
            self.x_offset.as_deref(),
            self.y_offset.as_deref(),
        )?;
        Ok(params)
    }
}

/// Settings with CLI overrides applied and the template decoded.
pub struct ResolvedSettings {
    pub template: Template,
    pub event_name: Option<String>,
    pub config: ComposeConfig,
}

impl SettingsArgs {
    pub fn settings(&self) -> Result<Option<BannerSettings>> {
        self.settings
            .as_ref()
            .map(|path| {
                BannerSettings::load(path)
                    .with_context(|| format!("Failed to load settings {}", path.display()))
            })
            .transpose()
    }

    pub fn resolve(&self) -> Result<ResolvedSettings> {
        let settings = self.settings()?;

        let template_path = match (&self.template, &settings) {
            (Some(path), _) => path.clone(),
            (None, Some(s)) => s.template.clone(),
            (None, None) => anyhow::bail!("No template given: pass --template or --settings"),
        };
        let template = Template::open(&template_path)?;

        let event_name = self
            .event_name
            .clone()
            .or_else(|| settings.as_ref().and_then(|s| s.event_name.clone()));
        let config = settings.map(|s| s.compose).unwrap_or_default();

        Ok(ResolvedSettings {
            template,
            event_name,
            config,
        })
    }
}
