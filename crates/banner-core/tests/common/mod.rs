#![allow(dead_code)]

use std::io::Cursor;

use banner_core::io::template::Template;
use chrono::{NaiveDate, NaiveDateTime};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// Encode an image as PNG bytes, the way an upload would arrive.
pub fn encode_png(img: &DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode PNG");
    buf.into_inner()
}

pub fn solid_photo(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    encode_png(&DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb(color),
    )))
}

/// White photo with a black vertical stripe covering columns `x0..x1`.
pub fn stripe_image(width: u32, height: u32, x0: u32, x1: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if (x0..x1).contains(&x) {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

/// Smooth diagonal gradient; survives JPEG with little error.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    })
}

pub fn template_filled(size: u32, color: [u8; 4]) -> Template {
    Template::from_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        size,
        size,
        Rgba(color),
    )))
}

pub fn transparent_template(size: u32) -> Template {
    template_filled(size, [0, 0, 0, 0])
}

pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 4, 17)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub fn decode_jpeg(bytes: &[u8]) -> RgbImage {
    let img = image::load_from_memory(bytes).expect("decode JPEG");
    img.to_rgb8()
}

/// Mean absolute per-channel difference between two same-sized images.
pub fn mean_abs_diff(a: &RgbImage, b: &RgbImage) -> f64 {
    assert_eq!(a.dimensions(), b.dimensions());
    let total: u64 = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&x, &y)| u64::from(x.abs_diff(y)))
        .sum();
    total as f64 / a.as_raw().len() as f64
}

/// Column of the darkest pixel on row `y`.
pub fn darkest_column(img: &RgbImage, y: u32) -> u32 {
    (0..img.width())
        .min_by_key(|&x| {
            let p = img.get_pixel(x, y);
            u32::from(p[0]) + u32::from(p[1]) + u32::from(p[2])
        })
        .unwrap()
}
