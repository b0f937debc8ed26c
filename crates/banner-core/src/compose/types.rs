use image::RgbImage;

use crate::consts::OUTPUT_MIME_TYPE;
use crate::geometry::CropGeometry;
use crate::io::template::Template;
use crate::transform::TransformParams;

/// Composition stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposeStage {
    Decoding,
    Resizing,
    Cropping,
    Compositing,
    Encoding,
}

impl std::fmt::Display for ComposeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decoding => write!(f, "Decoding photo"),
            Self::Resizing => write!(f, "Resizing"),
            Self::Cropping => write!(f, "Cropping"),
            Self::Compositing => write!(f, "Compositing"),
            Self::Encoding => write!(f, "Encoding JPEG"),
        }
    }
}

/// Thread-safe progress reporting for a composition.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started.
    fn begin_stage(&self, _stage: ComposeStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used by [`compose`](super::compose).
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Everything one composition needs from the caller.
///
/// The template and event name come in per request rather than from any
/// process-wide settings.
#[derive(Clone, Copy, Debug)]
pub struct ComposeRequest<'a> {
    pub photo: &'a [u8],
    pub template: &'a Template,
    pub params: TransformParams,
    pub event_name: Option<&'a str>,
}

/// Flattened canvas before encoding.
#[derive(Clone, Debug)]
pub struct RenderedBanner {
    pub image: RgbImage,
    pub geometry: CropGeometry,
}

/// Final output: encoded JPEG plus its download name.
#[derive(Clone, Debug)]
pub struct ComposedBanner {
    pub jpeg: Vec<u8>,
    pub filename: String,
    pub geometry: CropGeometry,
}

impl ComposedBanner {
    pub fn mime_type(&self) -> &'static str {
        OUTPUT_MIME_TYPE
    }
}
