use banner_core::config::{BannerSettings, ComposeConfig, ResampleFilter};
use banner_core::consts::{PREVIEW_WIDTH, TARGET_SIZE};
use banner_core::error::ComposeError;
use banner_core::compose::ComposeStage;

#[test]
fn test_compose_config_defaults() {
    let c = ComposeConfig::default();
    assert_eq!(c.target_size, TARGET_SIZE);
    assert_eq!(c.preview_width, PREVIEW_WIDTH);
    assert_eq!(c.jpeg_quality, 95);
    assert_eq!(c.filter, ResampleFilter::CatmullRom);
    assert_eq!(c.fallback_name, "EventBanner");
    assert_eq!(c.branding_suffix, "Techtical");
    assert!(c.validate().is_ok());
}

#[test]
fn test_resample_filter_display() {
    assert_eq!(format!("{}", ResampleFilter::CatmullRom), "Catmull-Rom");
    assert_eq!(format!("{}", ResampleFilter::Lanczos3), "Lanczos3");
}

#[test]
fn test_compose_stage_display() {
    assert_eq!(format!("{}", ComposeStage::Encoding), "Encoding JPEG");
    assert_eq!(format!("{}", ComposeStage::Decoding), "Decoding photo");
}

#[test]
fn test_validate_rejects_bad_quality() {
    let c = ComposeConfig {
        jpeg_quality: 0,
        ..Default::default()
    };
    assert!(matches!(c.validate(), Err(ComposeError::Config(_))));
    let c = ComposeConfig {
        jpeg_quality: 101,
        ..Default::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_sizes() {
    let c = ComposeConfig {
        target_size: 0,
        ..Default::default()
    };
    assert!(c.validate().is_err());
    let c = ComposeConfig {
        preview_width: 0,
        ..Default::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn test_minimal_settings_toml() {
    let s = BannerSettings::from_toml("template = \"frame.png\"\n").unwrap();
    assert_eq!(s.template.to_str(), Some("frame.png"));
    assert_eq!(s.event_name, None);
    assert_eq!(s.compose, ComposeConfig::default());
}

#[test]
fn test_settings_toml_overrides() {
    let toml = r#"
template = "frame.png"
event_name = "Spring Fest 2026"

[compose]
jpeg_quality = 80
filter = "Lanczos3"
"#;
    let s = BannerSettings::from_toml(toml).unwrap();
    assert_eq!(s.event_name.as_deref(), Some("Spring Fest 2026"));
    assert_eq!(s.compose.jpeg_quality, 80);
    assert_eq!(s.compose.filter, ResampleFilter::Lanczos3);
    assert_eq!(s.compose.target_size, TARGET_SIZE);
}

#[test]
fn test_settings_toml_invalid_quality() {
    let toml = "template = \"t.png\"\n[compose]\njpeg_quality = 0\n";
    assert!(matches!(
        BannerSettings::from_toml(toml),
        Err(ComposeError::Config(_))
    ));
}

#[test]
fn test_default_settings_serialize_and_reload() {
    let s = BannerSettings::default();
    let text = s.to_toml().unwrap();
    assert!(text.contains("template"));
    assert_eq!(BannerSettings::from_toml(&text).unwrap(), s);
}

#[test]
fn test_load_resolves_template_relative_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banner.toml");
    std::fs::write(&path, "template = \"assets/frame.png\"\n").unwrap();
    let s = BannerSettings::load(&path).unwrap();
    assert_eq!(s.template, dir.path().join("assets/frame.png"));
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BannerSettings::load(&dir.path().join("nope.toml")).unwrap_err();
    match err {
        ComposeError::SettingsRead { ref source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_malformed_toml_keeps_parse_error() {
    let err = BannerSettings::from_toml("template = [").unwrap_err();
    assert!(matches!(err, ComposeError::SettingsParse(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_validate_rejects_canvas_above_pixel_limit() {
    let c = ComposeConfig {
        target_size: 100_000,
        ..Default::default()
    };
    assert!(matches!(c.validate(), Err(ComposeError::Config(_))));

    let toml = "template = \"t.png\"\n[compose]\ntarget_size = 100000\n";
    assert!(BannerSettings::from_toml(toml).is_err());
}

#[test]
fn test_validate_rejects_path_like_fallback_name() {
    for name in ["../x", "a/b", "Event Banner", "", "Event_Banner"] {
        let c = ComposeConfig {
            fallback_name: name.to_string(),
            ..Default::default()
        };
        assert!(c.validate().is_err(), "fallback_name {name:?}");
    }
    let c = ComposeConfig {
        fallback_name: "Banner2026".to_string(),
        ..Default::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn test_validate_rejects_path_like_branding_suffix() {
    for suffix in ["../x", "a/b", "a\\b", "x.jpg"] {
        let c = ComposeConfig {
            branding_suffix: suffix.to_string(),
            ..Default::default()
        };
        assert!(c.validate().is_err(), "branding_suffix {suffix:?}");
    }
    let c = ComposeConfig {
        branding_suffix: "Studio-42_b".to_string(),
        ..Default::default()
    };
    assert!(c.validate().is_ok());
}
