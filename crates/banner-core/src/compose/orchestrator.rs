use chrono::NaiveDateTime;
use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use tracing::{debug, info};

use crate::composite::{composite_over, crop_padded, flatten};
use crate::config::ComposeConfig;
use crate::error::Result;
use crate::filename::{banner_filename, banner_stem, local_timestamp};
use crate::geometry::plan_geometry;
use crate::io::image_io::{decode_photo, encode_jpeg, resize_exact};
use crate::io::template::Template;
use crate::transform::TransformParams;

use super::types::{
    ComposeRequest, ComposeStage, ComposedBanner, NoOpReporter, ProgressReporter, RenderedBanner,
};

const FLATTEN_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Compose a banner, stamping the filename with the current local time.
pub fn compose(request: &ComposeRequest<'_>, config: &ComposeConfig) -> Result<ComposedBanner> {
    compose_reported(request, config, local_timestamp(), &NoOpReporter)
}

/// Compose a banner with an explicit filename timestamp.
pub fn compose_at(
    request: &ComposeRequest<'_>,
    config: &ComposeConfig,
    timestamp: NaiveDateTime,
) -> Result<ComposedBanner> {
    compose_reported(request, config, timestamp, &NoOpReporter)
}

/// Full pipeline: decode, place, composite, flatten, encode, name.
pub fn compose_reported(
    request: &ComposeRequest<'_>,
    config: &ComposeConfig,
    timestamp: NaiveDateTime,
    reporter: &dyn ProgressReporter,
) -> Result<ComposedBanner> {
    config.validate()?;

    reporter.begin_stage(ComposeStage::Decoding);
    let photo = decode_photo(request.photo)?;
    reporter.finish_stage();

    let rendered = render_banner(&photo, request.template, &request.params, config, reporter)?;

    reporter.begin_stage(ComposeStage::Encoding);
    let jpeg = encode_jpeg(&rendered.image, config.jpeg_quality)?;
    reporter.finish_stage();

    let stem = banner_stem(request.event_name, &config.fallback_name);
    let filename = banner_filename(&stem, &timestamp, &config.branding_suffix);
    info!(
        filename = %filename,
        bytes = jpeg.len(),
        "Banner composed"
    );

    Ok(ComposedBanner {
        jpeg,
        filename,
        geometry: rendered.geometry,
    })
}

/// Place an already-decoded photo under the template and flatten to RGB.
pub fn render_banner(
    photo: &RgbImage,
    template: &Template,
    params: &TransformParams,
    config: &ComposeConfig,
    reporter: &dyn ProgressReporter,
) -> Result<RenderedBanner> {
    let size = config.target_size;
    let filter: FilterType = config.filter.into();

    let geometry = plan_geometry(photo.width(), photo.height(), params, config)?;
    info!(
        source = %format!("{}x{}", geometry.source_width, geometry.source_height),
        resized = %format!("{}x{}", geometry.resized_width, geometry.resized_height),
        scale = params.scale,
        x_offset = params.x_offset,
        y_offset = params.y_offset,
        "Placing photo"
    );

    reporter.begin_stage(ComposeStage::Resizing);
    let resized = resize_exact(photo, geometry.resized_width, geometry.resized_height, filter);
    reporter.finish_stage();

    reporter.begin_stage(ComposeStage::Cropping);
    if !geometry.crop.is_within(resized.width(), resized.height()) {
        debug!(crop = ?geometry.crop, "Crop box extends past the photo, padding with transparency");
    }
    let cropped = crop_padded(&resized, &geometry.crop);
    let mut canvas = resize_exact(&cropped, size, size, filter);
    reporter.finish_stage();

    reporter.begin_stage(ComposeStage::Compositing);
    let overlay = template.fitted(size, filter);
    composite_over(&mut canvas, &overlay)?;
    let image = flatten(&canvas, FLATTEN_BACKGROUND);
    debug!(width = image.width(), height = image.height(), "Flattened canvas");
    reporter.finish_stage();

    Ok(RenderedBanner { image, geometry })
}
