//! Convenience helpers for loading fields via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Images are reduced to
//! 8-bit grayscale; the resulting field groups on the 256 luma levels.

use crate::field::{FieldView, OwnedField};
use crate::util::{VarCondError, VarCondResult};
use std::path::Path;

/// Creates a borrowed view from a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> VarCondResult<FieldView<'_, u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    FieldView::from_slice(img.as_raw(), width, height)
}

/// Creates an owned field from a grayscale image buffer.
pub fn owned_from_gray_image(img: &image::GrayImage) -> VarCondResult<OwnedField<u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedField::from_vec(img.as_raw().clone(), width, height)
}

/// Creates an owned grayscale field from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> VarCondResult<OwnedField<u8>> {
    let gray = img.to_luma8();
    owned_from_gray_image(&gray)
}

/// Loads an image from disk and converts it to a grayscale field.
pub fn load_gray_field<P: AsRef<Path>>(path: P) -> VarCondResult<OwnedField<u8>> {
    let img = image::open(path).map_err(|err| VarCondError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
