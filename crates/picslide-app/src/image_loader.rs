//! Image decoding and slicing for the board renderer.
//!
//! The engine never sees pixels; this module is the image provider from
//! its point of view. It decodes a file, center-crops it to a square,
//! and later slices the raster into per-tile [`ColorImage`]s using the
//! regions the tile-set builder computed.

use std::path::Path;

use eframe::egui::ColorImage;
use image::imageops;
use picslide_game::{ImageInfo, TileRegion};

/// A decoded, center-cropped square raster ready for slicing.
#[derive(Debug, Clone)]
pub(crate) struct LoadedImage {
    rgba: image::RgbaImage,
}

impl LoadedImage {
    /// Side length of the square raster, in pixels.
    pub(crate) fn side_px(&self) -> u32 {
        self.rgba.width()
    }

    /// The descriptor handed to the puzzle engine.
    pub(crate) fn info(&self) -> ImageInfo {
        ImageInfo {
            side_px: self.side_px(),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
#[display("failed to load image: {_0}")]
pub(crate) struct ImageLoadError(image::ImageError);

/// Decodes the file at `path` and center-crops it to a square, the same
/// way the board expects its source image.
pub(crate) fn load_square(path: &Path) -> Result<LoadedImage, ImageLoadError> {
    let decoded = image::open(path)?;
    let (width, height) = (decoded.width(), decoded.height());
    let side = width.min(height);
    let cropped = decoded.crop_imm((width - side) / 2, (height - side) / 2, side, side);
    Ok(LoadedImage {
        rgba: cropped.to_rgba8(),
    })
}

/// Returns the crop described by `region` as an egui image.
pub(crate) fn tile_color_image(image: &LoadedImage, region: TileRegion) -> ColorImage {
    let crop = imageops::crop_imm(&image.rgba, region.x, region.y, region.width, region.height)
        .to_image();
    ColorImage::from_rgba_unmultiplied(
        [crop.width() as usize, crop.height() as usize],
        crop.as_raw(),
    )
}

/// Returns the whole raster as an egui image, for the sidebar preview.
pub(crate) fn full_color_image(image: &LoadedImage) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [image.rgba.width() as usize, image.rgba.height() as usize],
        image.rgba.as_raw(),
    )
}
