use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Could not decode photo: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Invalid transformation data: {field} = {value:?} ({reason})")]
    InvalidTransform {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Template unavailable at {path}: {source}")]
    TemplateUnavailable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Resized photo would be {width}x{height}, above the {limit} pixel limit")]
    OversizedResize { width: u32, height: u32, limit: u64 },

    #[error("Processing error during {stage}: {source}")]
    Processing {
        stage: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Could not read settings {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("Could not serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),
}

/// Which side of a request boundary an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad input from the end user (maps to a 4xx-style response).
    Client,
    /// Misconfiguration or an internal failure (maps to a 5xx-style response).
    Server,
}

impl ComposeError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Decode(_) | Self::InvalidTransform { .. } | Self::OversizedResize { .. } => {
                ErrorClass::Client
            }
            Self::TemplateUnavailable { .. }
            | Self::Processing { .. }
            | Self::Config(_)
            | Self::SettingsRead { .. }
            | Self::SettingsParse(_)
            | Self::SettingsSerialize(_) => ErrorClass::Server,
        }
    }

    pub(crate) fn processing(stage: &'static str, source: image::ImageError) -> Self {
        Self::Processing { stage, source }
    }
}

pub type Result<T> = std::result::Result<T, ComposeError>;
