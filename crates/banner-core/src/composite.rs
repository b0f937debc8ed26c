use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, Rgb, RgbImage, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{ComposeError, Result};
use crate::geometry::CropBox;

/// Cut `crop` out of `image` into a new RGBA buffer of the box's size.
///
/// Pixels the photo covers are copied fully opaque; the rest of the box is
/// left transparent so it flattens to the background colour later.
pub fn crop_padded(image: &RgbImage, crop: &CropBox) -> RgbaImage {
    let (out_w, out_h) = (crop.width(), crop.height());
    let mut out = RgbaImage::new(out_w, out_h);

    let x0 = crop.left.max(0);
    let y0 = crop.top.max(0);
    let x1 = crop.left.saturating_add(i64::from(out_w)).min(i64::from(image.width()));
    let y1 = crop.top.saturating_add(i64::from(out_h)).min(i64::from(image.height()));

    for y in y0..y1 {
        for x in x0..x1 {
            let Rgb([r, g, b]) = *image.get_pixel(x as u32, y as u32);
            out.put_pixel(
                (x - crop.left) as u32,
                (y - crop.top) as u32,
                Rgba([r, g, b, 255]),
            );
        }
    }
    out
}

/// Porter-Duff "over" for straight (non-premultiplied) RGBA8.
pub fn over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    let da = u32::from(dst[3]);

    // Both weights carry an extra factor of 255.
    let src_w = sa * 255;
    let dst_w = da * (255 - sa);
    let total = src_w + dst_w;
    if total == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = u32::from(src[i]) * src_w + u32::from(dst[i]) * dst_w;
        out[i] = ((c + total / 2) / total) as u8;
    }
    out[3] = ((total + 127) / 255) as u8;
    Rgba(out)
}

/// Composite `foreground` over `background` in place. Both must be the same size.
pub fn composite_over(background: &mut RgbaImage, foreground: &RgbaImage) -> Result<()> {
    if background.dimensions() != foreground.dimensions() {
        return Err(dimension_mismatch("composite"));
    }
    let (w, h) = background.dimensions();
    if w == 0 || h == 0 {
        return Ok(());
    }
    let row_len = w as usize * 4;
    let pixel_count = w as usize * h as usize;

    let dst: &mut [u8] = background;
    let src: &[u8] = foreground;

    let blend_row = |(d_row, s_row): (&mut [u8], &[u8])| {
        for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
            let out = over(Rgba([d[0], d[1], d[2], d[3]]), Rgba([s[0], s[1], s[2], s[3]]));
            d.copy_from_slice(&out.0);
        }
    };

    if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
        dst.par_chunks_mut(row_len)
            .zip(src.par_chunks(row_len))
            .for_each(blend_row);
    } else {
        dst.chunks_mut(row_len).zip(src.chunks(row_len)).for_each(blend_row);
    }
    Ok(())
}

/// Drop the alpha channel by compositing onto an opaque `background` colour.
pub fn flatten(image: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let (w, h) = image.dimensions();
    let mut out = RgbImage::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let pixel_count = w as usize * h as usize;

    let src: &[u8] = image;
    let dst: &mut [u8] = &mut out;

    let flatten_row = |(d_row, s_row): (&mut [u8], &[u8])| {
        for (d, s) in d_row.chunks_exact_mut(3).zip(s_row.chunks_exact(4)) {
            let a = u32::from(s[3]);
            for i in 0..3 {
                let c = u32::from(s[i]) * a + u32::from(background[i]) * (255 - a);
                d[i] = ((c + 127) / 255) as u8;
            }
        }
    };

    if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
        dst.par_chunks_mut(w as usize * 3)
            .zip(src.par_chunks(w as usize * 4))
            .for_each(flatten_row);
    } else {
        dst.chunks_mut(w as usize * 3)
            .zip(src.chunks(w as usize * 4))
            .for_each(flatten_row);
    }
    out
}

fn dimension_mismatch(stage: &'static str) -> ComposeError {
    ComposeError::processing(
        stage,
        ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )),
    )
}
