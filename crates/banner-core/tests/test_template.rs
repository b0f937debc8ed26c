use std::io::Write;

use banner_core::error::{ComposeError, ErrorClass};
use banner_core::io::template::Template;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, Rgb, RgbImage};

mod common;

#[test]
fn test_missing_template_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.png");
    let err = Template::open(&path).unwrap_err();
    match err {
        ComposeError::TemplateUnavailable {
            source: ImageError::IoError(ref io),
            ..
        } => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.class(), ErrorClass::Server);
}

#[test]
fn test_corrupt_template_is_unavailable() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"definitely not a png").unwrap();
    file.flush().unwrap();
    let err = Template::open(file.path()).unwrap_err();
    assert!(matches!(err, ComposeError::TemplateUnavailable { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_corrupt_template_bytes_are_unavailable() {
    assert!(matches!(
        Template::from_bytes(&[0u8; 16]),
        Err(ComposeError::TemplateUnavailable { .. })
    ));
}

#[test]
fn test_template_without_alpha_becomes_opaque() {
    let rgb = RgbImage::from_pixel(20, 10, Rgb([1, 2, 3]));
    let bytes = common::encode_png(&DynamicImage::ImageRgb8(rgb));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.png");
    std::fs::write(&path, &bytes).unwrap();

    let template = Template::open(&path).unwrap();
    assert_eq!((template.width(), template.height()), (20, 10));
    assert_eq!(template.source(), Some(path.as_path()));
    assert!(template.image().pixels().all(|p| p.0 == [1, 2, 3, 255]));
}

#[test]
fn test_fitted_stretches_to_square() {
    let template = common::template_filled(300, [10, 20, 30, 0]);
    let fitted = template.fitted(800, FilterType::Triangle);
    assert_eq!(fitted.dimensions(), (800, 800));
    assert!(fitted.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_fitted_same_size_is_untouched() {
    let template = common::template_filled(800, [9, 8, 7, 6]);
    let fitted = template.fitted(800, FilterType::Lanczos3);
    assert_eq!(&fitted, template.image());
}
