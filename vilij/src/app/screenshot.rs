use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};

/// Writes a captured frame as PNG.
pub fn save_png(image: &egui::ColorImage, path: &Path) -> Result<(), ImageError> {
    let [width, height] = image.size;
    let bytes: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();
    let Some(buffer) = RgbaImage::from_raw(width as u32, height as u32, bytes) else {
        return Err(ImageError::Parameter(image::error::ParameterError::from_kind(
            image::error::ParameterErrorKind::DimensionMismatch,
        )));
    };
    buffer.save_with_format(path, ImageFormat::Png)?;
    log::debug!("saved {}x{} screenshot to {:?}", width, height, path);
    Ok(())
}
