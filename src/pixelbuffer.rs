// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image being carved
//!
//! A plain, tightly packed, row-major RGB8 buffer.  The carver only
//! ever works on three-channel bytes, so rather than being generic over
//! every `image::Pixel` it owns exactly that, and converts to and from
//! `image::RgbImage` at the edges.

use crate::error::SeamError;
use image::RgbImage;
use std::fmt;

/// Bytes per pixel.
pub const CHANNELS: usize = 3;

#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Take ownership of raw RGB bytes.  Fails unless there are exactly
    /// `width * height * 3` of them.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SeamError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS));
        match expected {
            Some(expected) if expected == data.len() => Ok(PixelBuffer {
                width,
                height,
                data,
            }),
            _ => Err(SeamError::BufferLength {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                len: data.len(),
            }),
        }
    }

    /// Build an image by asking `f` for the color at every `(x, y)`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        PixelBuffer {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The three channel bytes at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS;
        &self.data[start..start + CHANNELS]
    }

    #[inline]
    pub(crate) fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let start = ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS;
        &mut self.data[start..start + CHANNELS]
    }

    /// All of row `y`, channel bytes interleaved.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// A seam can only be taken out of an image at least two pixels wide
    /// and one pixel tall.
    pub fn check_carvable(&self) -> Result<(), SeamError> {
        if self.width < 2 || self.height < 1 {
            return Err(SeamError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn into_rgb_image(self) -> Result<RgbImage, SeamError> {
        let (width, height, len) = (self.width, self.height, self.data.len());
        RgbImage::from_raw(width, height, self.data).ok_or(SeamError::BufferLength {
            width,
            height,
            expected: width as usize * height as usize * CHANNELS,
            len,
        })
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        PixelBuffer {
            width,
            height,
            data: image.into_raw(),
        }
    }
}

// Megapixel images in a panic message or a failed assertion are no use
// to anyone.
impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn rejects_short_buffers() {
        match PixelBuffer::new(2, 2, vec![0; 11]) {
            Err(SeamError::BufferLength { expected, len, .. }) => {
                assert_eq!(expected, 12);
                assert_eq!(len, 11);
            }
            other => panic!("expected a length error, got {:?}", other),
        }
    }

    #[test]
    fn pixels_are_row_major_rgb() {
        let image = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 9]);
        assert_eq!(image.pixel(2, 1), &[2, 1, 9]);
        assert_eq!(image.row(1), &[0, 1, 9, 1, 1, 9, 2, 1, 9]);
        assert_eq!(image.pixel_count(), 6);
    }

    #[test]
    fn narrow_images_cannot_be_carved() {
        let image = PixelBuffer::from_fn(1, 4, |_, _| [0, 0, 0]);
        assert!(match image.check_carvable() {
            Err(SeamError::InvalidDimensions { width: 1, height: 4 }) => true,
            _ => false,
        });
        assert!(PixelBuffer::from_fn(2, 1, |_, _| [0, 0, 0])
            .check_carvable()
            .is_ok());
    }

    #[test]
    fn converts_through_rgb_image() {
        let rgb = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8, y as u8, 200]));
        let image = PixelBuffer::from(rgb.clone());
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.pixel(3, 2), &[3, 2, 200]);
        assert_eq!(image.into_rgb_image().unwrap().into_raw(), rgb.into_raw());
    }
}
