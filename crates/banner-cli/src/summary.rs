use std::path::Path;

use banner_core::config::ComposeConfig;
use banner_core::geometry::CropGeometry;
use banner_core::transform::TransformParams;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    warn: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warn: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_compose_summary(
    photo: &Path,
    output: &Path,
    params: &TransformParams,
    geometry: &CropGeometry,
    config: &ComposeConfig,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Banner"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(6)));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Photo"), s.path.apply_to(photo.display()));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!();

    print_geometry_body(&s, params, geometry, config);
}

pub fn print_geometry(
    photo: &Path,
    params: &TransformParams,
    geometry: &CropGeometry,
    config: &ComposeConfig,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Placement plan"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Photo"), s.path.apply_to(photo.display()));
    println!();

    print_geometry_body(&s, params, geometry, config);
}

fn print_geometry_body(
    s: &Styles,
    params: &TransformParams,
    geometry: &CropGeometry,
    config: &ComposeConfig,
) {
    println!("  {}", s.header.apply_to("Transform"));
    println!("    {:<12}{}", s.label.apply_to("Scale"), s.value.apply_to(params.scale));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(format!("{}, {} (preview px)", params.x_offset, params.y_offset))
    );
    println!();

    println!("  {}", s.header.apply_to("Geometry"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Source"),
        s.value.apply_to(format!("{}x{}", geometry.source_width, geometry.source_height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Resized"),
        s.value.apply_to(format!("{}x{}", geometry.resized_width, geometry.resized_height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Px/unit"),
        s.value.apply_to(format!("{:.4}", geometry.pixels_per_screen_unit))
    );
    let crop = &geometry.crop;
    println!(
        "    {:<12}{}",
        s.label.apply_to("Crop"),
        s.value.apply_to(format!(
            "({}, {}) .. ({}, {})",
            crop.left, crop.top, crop.right, crop.bottom
        ))
    );
    if !crop.is_within(geometry.resized_width, geometry.resized_height) {
        println!(
            "    {:<12}{}",
            "",
            s.warn.apply_to("crop extends past the photo; uncovered area will be white")
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!(
            "{0}x{0}, {1}, JPEG q{2}",
            config.target_size, config.filter, config.jpeg_quality
        ))
    );
    println!();
}
