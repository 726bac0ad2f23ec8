//! Alpha-preserving gradient recoloring
//!
//! The RGB of every pixel is replaced by the gradient color of its row while the
//! alpha channel is copied byte for byte from the source image.

use crate::{
    error::RecolorError,
    gradient::{Color, GradientSpec},
};
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ColorType, DynamicImage, ImageEncoder, ImageFormat, Rgba, RgbaImage,
};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Snapshot of an image's alpha channel, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    /// Images without an alpha channel snapshot as fully opaque.
    /// 16-bit sources are reduced to RGBA8 first.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let alpha = rgba.pixels().map(|p| p[3]).collect();

        Self {
            width,
            height,
            alpha,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.alpha[(y as usize) * (self.width as usize) + x as usize]
    }
}

/// Build an image from a mask and one color per row.
///
/// Panics if `colors` does not hold exactly one entry per row of `mask`.
pub fn composite(mask: AlphaMask, colors: &[Color]) -> RgbaImage {
    assert_eq!(
        colors.len(),
        mask.height as usize,
        "expected one gradient color per row"
    );

    RgbaImage::from_fn(mask.width, mask.height, |x, y| {
        let Color { r, g, b } = colors[y as usize];
        Rgba([r, g, b, mask.get(x, y)])
    })
}

/// Replace the RGB of `image` with the vertical gradient described by `spec`.
pub fn recolor(image: &DynamicImage, spec: &GradientSpec) -> RgbaImage {
    let mask = AlphaMask::from_image(image);
    let colors = spec.row_colors(mask.height());
    composite(mask, &colors)
}

pub fn decode_png(bytes: &[u8]) -> Result<DynamicImage, RecolorError> {
    image::load_from_memory_with_format(bytes, ImageFormat::Png).map_err(RecolorError::Decode)
}

// Same encoder settings as the icons we ship: best compression, adaptive filtering
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RecolorError> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(RecolorError::Encode)?;
    Ok(buf)
}

/// Read, recolor and re-encode the PNG at `path` without touching the disk.
pub fn recolor_to_png(path: &Path, spec: &GradientSpec) -> Result<Vec<u8>, RecolorError> {
    let bytes = fs::read(path).map_err(|e| RecolorError::read_failed(path.to_path_buf(), e))?;
    let source = decode_png(&bytes)?;
    log::debug!(
        "{}: {}x{} {:?}",
        path.display(),
        source.width(),
        source.height(),
        source.color()
    );

    encode_png(&recolor(&source, spec))
}

/// Recolor the PNG at `path` in place.
///
/// The new content is written to a temporary file next to the original and
/// renamed over it, so a failure at any step leaves the original untouched.
pub fn recolor_file(path: &Path, spec: &GradientSpec) -> Result<(), RecolorError> {
    let png = recolor_to_png(path, spec)?;
    replace_file(path, &png)
}

fn replace_file(path: &Path, contents: &[u8]) -> Result<(), RecolorError> {
    let mut tmp =
        NamedTempFile::new_in(parent_dir(path)).map_err(RecolorError::write_failed)?;
    tmp.write_all(contents).map_err(RecolorError::write_failed)?;
    tmp.as_file().sync_all().map_err(RecolorError::write_failed)?;

    // Keep the mode of the file we replace; temp files are created 0600
    let permissions = fs::metadata(path)
        .map_err(RecolorError::write_failed)?
        .permissions();
    tmp.as_file()
        .set_permissions(permissions)
        .map_err(RecolorError::write_failed)?;

    tmp.persist(path)
        .map_err(|e| RecolorError::write_failed(e.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
