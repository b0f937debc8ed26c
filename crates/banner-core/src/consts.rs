/// Side length, in pixels, of the square output banner.
///
/// Part of the offset protocol shared with the client preview: changing it
/// changes what every stored offset means.
pub const TARGET_SIZE: u32 = 800;

/// Width, in pixels, of the client's interactive preview box. Drag offsets
/// arrive measured against this width.
pub const PREVIEW_WIDTH: u32 = 600;

/// JPEG quality used for the flattened banner.
pub const JPEG_QUALITY: u8 = 95;

/// Scale used when the client sends none, or sends a non-positive/non-finite one.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Smallest accepted zoom. Below this the resized photo no longer covers the canvas.
pub const MIN_SCALE: f64 = 1.0;

/// Filename stem used when the event name cleans down to nothing.
pub const DEFAULT_EVENT_NAME: &str = "EventBanner";

/// Fixed suffix appended to every generated filename.
pub const BRANDING_SUFFIX: &str = "Techtical";

/// `strftime` pattern for the filename timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// MIME type of the composed output.
pub const OUTPUT_MIME_TYPE: &str = "image/jpeg";

/// Upper bound on the resized photo's pixel count (100 MP).
pub const MAX_RESIZED_PIXELS: u64 = 100_000_000;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
