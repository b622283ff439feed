// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing images
//!
//! Thin wrappers around the `image` crate.  The format is chosen from
//! the file extension; whatever comes in is converted to RGB8.

use crate::error::SeamError;
use crate::pixelbuffer::PixelBuffer;
use image::{GrayImage, RgbImage};
use log::info;
use std::path::Path;

fn codec_error<E: ToString>(path: &Path, err: E) -> SeamError {
    SeamError::Codec {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

pub fn decode(path: &Path) -> Result<PixelBuffer, SeamError> {
    info!("Reading '{}'", path.display());
    let image = image::open(path).map_err(|e| codec_error(path, e))?.to_rgb();
    let buffer = PixelBuffer::from(image);
    info!("Loaded {}x{} image", buffer.width(), buffer.height());
    Ok(buffer)
}

pub fn encode(image: &PixelBuffer, path: &Path) -> Result<(), SeamError> {
    let (width, height) = image.dimensions();
    info!("Writing {}x{} image to '{}'", width, height, path.display());
    let rgb = RgbImage::from_raw(width, height, image.as_raw().to_vec())
        .ok_or_else(|| codec_error(path, "pixel buffer does not match its dimensions"))?;
    rgb.save(path).map_err(|e| codec_error(path, e))
}

pub fn encode_gray(image: &GrayImage, path: &Path) -> Result<(), SeamError> {
    info!("Writing to '{}'", path.display());
    image.save(path).map_err(|e| codec_error(path, e))
}
