use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, ImageError, ImageReader, Pixel, RgbImage};

use crate::error::{ComposeError, Result};

/// Decode uploaded photo bytes (format sniffed from content) into opaque RGB8.
pub fn decode_photo(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(ComposeError::Decode)?;
    Ok(img.to_rgb8())
}

/// Read only the header of an uploaded photo to get its dimensions.
pub fn photo_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ComposeError::Decode(ImageError::IoError(e)))?;
    reader.into_dimensions().map_err(ComposeError::Decode)
}

/// Encode an RGB8 image as baseline JPEG.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| ComposeError::processing("encode", e))?;
    Ok(buf.into_inner())
}

/// Resize to exactly `width` x `height`, skipping the resample when the size
/// already matches.
pub fn resize_exact<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
    filter: FilterType,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    if image.dimensions() == (width, height) {
        image.clone()
    } else {
        imageops::resize(image, width, height, filter)
    }
}
