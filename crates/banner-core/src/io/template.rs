use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::error::{ComposeError, Result};
use crate::io::image_io::resize_exact;

/// The transparent overlay drawn on top of every photo.
#[derive(Clone, Debug)]
pub struct Template {
    image: RgbaImage,
    source: Option<PathBuf>,
}

impl Template {
    /// Load a template from disk. Any failure, a missing file included, is
    /// reported as [`ComposeError::TemplateUnavailable`] carrying the cause.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|source| ComposeError::TemplateUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let mut template = Self::from_image(img);
        template.source = Some(path.to_path_buf());
        Ok(template)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img =
            image::load_from_memory(bytes).map_err(|source| ComposeError::TemplateUnavailable {
                path: PathBuf::from("<memory>"),
                source,
            })?;
        Ok(Self::from_image(img))
    }

    /// Wrap an already-decoded image, adding an alpha channel if it has none.
    pub fn from_image(img: DynamicImage) -> Self {
        Self {
            image: img.to_rgba8(),
            source: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The template stretched to a `size` x `size` canvas.
    pub fn fitted(&self, size: u32, filter: FilterType) -> RgbaImage {
        resize_exact(&self.image, size, size, filter)
    }
}
