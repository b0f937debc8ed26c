use tracing::warn;

use crate::consts::{DEFAULT_SCALE, MIN_SCALE};
use crate::error::{ComposeError, Result};

/// Client-side placement of the photo: zoom factor plus drag offsets in
/// preview-screen pixels (origin at the image center, +x right, +y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformParams {
    pub scale: f64,
    pub x_offset: i64,
    pub y_offset: i64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            x_offset: 0,
            y_offset: 0,
        }
    }
}

impl TransformParams {
    /// Build from already-numeric values. The scale goes through the same
    /// fallback/clamp policy as [`TransformParams::parse`].
    pub fn new(scale: f64, x_offset: i64, y_offset: i64) -> Self {
        Self {
            scale: normalize_scale(scale),
            x_offset,
            y_offset,
        }
    }

    /// Parse raw form fields.
    ///
    /// Policy:
    /// - a missing field takes its default (`scale = 1.0`, offsets `0`);
    /// - text that is not a number is rejected for every field;
    /// - offsets must be integers, so `"12.5"` is rejected rather than rounded;
    /// - a numeric scale that is non-finite or `<= 0` falls back to `1.0`,
    ///   and one below `MIN_SCALE` is raised to it.
    pub fn parse(
        scale: Option<&str>,
        x_offset: Option<&str>,
        y_offset: Option<&str>,
    ) -> Result<Self> {
        let scale = match scale {
            Some(raw) => parse_scale(raw)?,
            None => DEFAULT_SCALE,
        };
        let x_offset = x_offset.map(|raw| parse_offset("x_offset", raw)).transpose()?;
        let y_offset = y_offset.map(|raw| parse_offset("y_offset", raw)).transpose()?;
        Ok(Self::new(scale, x_offset.unwrap_or(0), y_offset.unwrap_or(0)))
    }
}

fn parse_scale(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ComposeError::InvalidTransform {
            field: "scale",
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

fn parse_offset(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ComposeError::InvalidTransform {
            field,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

fn normalize_scale(scale: f64) -> f64 {
    if !scale.is_finite() || scale <= 0.0 {
        warn!(scale, fallback = DEFAULT_SCALE, "Unusable scale, using default");
        return DEFAULT_SCALE;
    }
    if scale < MIN_SCALE {
        warn!(scale, min = MIN_SCALE, "Scale below minimum zoom, clamping");
        return MIN_SCALE;
    }
    scale
}
