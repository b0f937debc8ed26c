use std::fmt;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{
    BRANDING_SUFFIX, DEFAULT_EVENT_NAME, JPEG_QUALITY, MAX_RESIZED_PIXELS, PREVIEW_WIDTH,
    TARGET_SIZE,
};
use crate::error::{ComposeError, Result};
use crate::filename::sanitize_event_name;

/// Resampling filter used for every resize in the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Triangle"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Gaussian => write!(f, "Gaussian"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Knobs of the composition pipeline.
///
/// `target_size` and `preview_width` form a contract with the client preview;
/// the defaults match the shipped UI and should only change together with it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    pub target_size: u32,
    pub preview_width: u32,
    pub jpeg_quality: u8,
    pub filter: ResampleFilter,
    pub fallback_name: String,
    pub branding_suffix: String,
    pub max_resized_pixels: u64,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            target_size: TARGET_SIZE,
            preview_width: PREVIEW_WIDTH,
            jpeg_quality: JPEG_QUALITY,
            filter: ResampleFilter::default(),
            fallback_name: DEFAULT_EVENT_NAME.to_string(),
            branding_suffix: BRANDING_SUFFIX.to_string(),
            max_resized_pixels: MAX_RESIZED_PIXELS,
        }
    }
}

impl ComposeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(ComposeError::Config("target_size must be > 0".into()));
        }
        if self.preview_width == 0 {
            return Err(ComposeError::Config("preview_width must be > 0".into()));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ComposeError::Config(format!(
                "jpeg_quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        let canvas_pixels = u64::from(self.target_size) * u64::from(self.target_size);
        if canvas_pixels > self.max_resized_pixels {
            return Err(ComposeError::Config(format!(
                "target_size {0}x{0} exceeds max_resized_pixels ({1})",
                self.target_size, self.max_resized_pixels
            )));
        }
        // Both end up verbatim in the output filename.
        let clean_fallback = sanitize_event_name(&self.fallback_name);
        if clean_fallback.as_deref() != Some(self.fallback_name.as_str()) {
            return Err(ComposeError::Config(format!(
                "fallback_name may only hold ASCII letters and digits, got {:?}",
                self.fallback_name
            )));
        }
        if !self
            .branding_suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ComposeError::Config(format!(
                "branding_suffix may only hold ASCII letters, digits, '_' and '-', got {:?}",
                self.branding_suffix
            )));
        }
        Ok(())
    }
}

/// Per-event settings handed over by whoever owns the admin side: which
/// template to overlay and what to call the downloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannerSettings {
    pub template: PathBuf,
    pub event_name: Option<String>,
    #[serde(default)]
    pub compose: ComposeConfig,
}

impl Default for BannerSettings {
    fn default() -> Self {
        Self {
            template: PathBuf::from("template.png"),
            event_name: Some("Sample Event Name".to_string()),
            compose: ComposeConfig::default(),
        }
    }
}

impl BannerSettings {
    /// Read settings from a TOML file.
    ///
    /// A relative `template` path is resolved against the settings file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ComposeError::SettingsRead {
                path: path.to_path_buf(),
                source,
            })?;
        let mut settings = Self::from_toml(&contents)?;
        if settings.template.is_relative() {
            if let Some(parent) = path.parent() {
                settings.template = parent.join(&settings.template);
            }
        }
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: Self = toml::from_str(contents)?;
        settings.compose.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
