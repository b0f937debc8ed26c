use image::error::{ParameterError, ParameterErrorKind};
use image::ImageError;

use crate::config::ComposeConfig;
use crate::error::{ComposeError, Result};
use crate::transform::TransformParams;

/// Crop rectangle in resized-photo pixel coordinates.
///
/// Edges are signed: a large drag offset can push the box past the photo,
/// in which case the uncovered part of the canvas stays transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left).clamp(1, i64::from(u32::MAX)) as u32
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).clamp(1, i64::from(u32::MAX)) as u32
    }

    /// True when the whole box lies inside a `width` x `height` image.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= i64::from(width)
            && self.bottom <= i64::from(height)
    }
}

/// Every intermediate value of the placement math for one photo.
#[derive(Clone, Debug, PartialEq)]
pub struct CropGeometry {
    pub source_width: u32,
    pub source_height: u32,
    /// Length the shorter source side is resized to: `floor(target * scale)`.
    pub min_required_dim: u32,
    pub resized_width: u32,
    pub resized_height: u32,
    /// Resized-photo pixels per preview-screen pixel.
    pub pixels_per_screen_unit: f64,
    pub image_offset_x: f64,
    pub image_offset_y: f64,
    pub crop: CropBox,
}

impl CropGeometry {
    pub fn needs_resize(&self) -> bool {
        self.resized_width != self.source_width || self.resized_height != self.source_height
    }
}

/// Work out how a `source_width` x `source_height` photo is resized and
/// cropped so the canvas matches what the client preview showed.
pub fn plan_geometry(
    source_width: u32,
    source_height: u32,
    params: &TransformParams,
    config: &ComposeConfig,
) -> Result<CropGeometry> {
    if source_width == 0 || source_height == 0 {
        return Err(ComposeError::processing(
            "resize",
            ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )),
        ));
    }

    let target = f64::from(config.target_size);
    let min_required_dim = ((target * params.scale).floor() as u32).max(1);

    let (width, height) = (f64::from(source_width), f64::from(source_height));
    let (resized_width, resized_height) = if source_width < source_height {
        let new_height = height * (f64::from(min_required_dim) / width);
        (min_required_dim, round_dim(new_height))
    } else {
        let new_width = width * (f64::from(min_required_dim) / height);
        (round_dim(new_width), min_required_dim)
    };

    let pixels = u64::from(resized_width) * u64::from(resized_height);
    if pixels > config.max_resized_pixels {
        return Err(ComposeError::OversizedResize {
            width: resized_width,
            height: resized_height,
            limit: config.max_resized_pixels,
        });
    }

    let pixels_per_screen_unit = f64::from(resized_width) / f64::from(config.preview_width);
    let image_offset_x = params.x_offset as f64 * pixels_per_screen_unit;
    let image_offset_y = params.y_offset as f64 * pixels_per_screen_unit;

    let center_x = f64::from(resized_width) / 2.0;
    let center_y = f64::from(resized_height) / 2.0;
    let half = target / 2.0;

    // Truncate toward zero, not floor: -0.5 becomes 0.
    let crop = CropBox {
        left: (center_x - half - image_offset_x) as i64,
        top: (center_y - half - image_offset_y) as i64,
        right: (center_x + half - image_offset_x) as i64,
        bottom: (center_y + half - image_offset_y) as i64,
    };

    Ok(CropGeometry {
        source_width,
        source_height,
        min_required_dim,
        resized_width,
        resized_height,
        pixels_per_screen_unit,
        image_offset_x,
        image_offset_y,
        crop,
    })
}

fn round_dim(value: f64) -> u32 {
    (value.round() as u32).max(1)
}
