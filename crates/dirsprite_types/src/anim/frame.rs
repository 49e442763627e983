//! Decoded animation frames.

use std::fmt;

use image::{Rgba, RgbaImage};

use super::palette::Palette;
use crate::error::AnimError;

/// A single decoded frame, stored as a full-color raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	image: RgbaImage,
}

impl Frame {
	/// Wraps an already decoded raster.
	pub fn from_image(image: RgbaImage) -> Self {
		Self {
			image,
		}
	}

	/// Builds a frame from palette-indexed pixels.
	///
	/// Pixels using [`Palette::TRANSPARENT_INDEX`] become fully transparent;
	/// every other index takes its palette color.
	///
	/// # Errors
	///
	/// Returns [`AnimError::PixelCountMismatch`] when `indices` does not hold
	/// exactly `width * height` pixels.
	pub fn from_indexed(
		width: u32,
		height: u32,
		indices: &[u8],
		palette: &Palette,
	) -> Result<Self, AnimError> {
		let expected = width as usize * height as usize;
		if indices.len() != expected {
			return Err(AnimError::PixelCountMismatch {
				width,
				height,
				expected,
				actual: indices.len(),
			});
		}

		let mut image = RgbaImage::new(width, height);
		for (pixel, &index) in image.pixels_mut().zip(indices) {
			*pixel = if index == Palette::TRANSPARENT_INDEX {
				Rgba([0, 0, 0, 0])
			} else {
				let color = palette.get(index);
				Rgba([color.r, color.g, color.b, 255])
			};
		}

		Ok(Self {
			image,
		})
	}

	/// Returns the frame raster.
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Consumes the frame and returns its raster.
	pub fn into_image(self) -> RgbaImage {
		self.image
	}

	/// Returns the frame width.
	pub fn width(&self) -> u32 {
		self.image.width()
	}

	/// Returns the frame height.
	pub fn height(&self) -> u32 {
		self.image.height()
	}

	/// Returns the `(width, height)` pair.
	pub fn dimensions(&self) -> (u32, u32) {
		self.image.dimensions()
	}
}

impl From<RgbaImage> for Frame {
	fn from(image: RgbaImage) -> Self {
		Self::from_image(image)
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Frame({}x{})", self.width(), self.height())
	}
}
