use image::ImageError;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Why a single image could not be recolored
#[derive(Error, Debug)]
pub enum RecolorError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] ImageError),

    #[error("No image found at {}", .0.display())]
    NotFound(PathBuf),
}

impl RecolorError {
    pub(crate) fn read_failed(path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            RecolorError::NotFound(path)
        } else {
            RecolorError::Decode(ImageError::IoError(err))
        }
    }

    pub(crate) fn write_failed(err: io::Error) -> Self {
        RecolorError::Encode(ImageError::IoError(err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RecolorError::NotFound(_))
    }
}
