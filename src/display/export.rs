//! Still-image export of a finished buffer

use super::PixelBuffer;
use crate::error::Error;
use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::RgbImage;
use std::path::Path;

/// Copy the buffer into an owned RGB image
pub fn to_image(buffer: &PixelBuffer) -> Result<RgbImage, Error> {
    rgb_image(buffer.width(), buffer.height(), buffer.to_rgb_bytes())
}

fn rgb_image(width: u32, height: u32, bytes: Vec<u8>) -> Result<RgbImage, Error> {
    let len = bytes.len();
    RgbImage::from_raw(width, height, bytes).ok_or_else(|| {
        log::error!("{} RGB bytes do not cover a {}x{} image", len, width, height);
        Error::Export(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )))
    })
}

/// Write the buffer as a PNG; the format is fixed regardless of extension
pub fn save_png(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    to_image(buffer)?.save_with_format(path, image::ImageFormat::Png)?;
    log::info!(
        "Wrote {}x{} PNG to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}
