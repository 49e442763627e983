//! Directions: the frame sequence an animation plays when facing one way.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::frame::Frame;
use crate::error::AnimError;

/// Bounding box enclosing every frame of a direction.
///
/// The origin is relative to the sprite anchor and may be negative; the box
/// size drives the display size of the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
	/// Left edge relative to the anchor
	pub left: i32,
	/// Top edge relative to the anchor
	pub top: i32,
	/// Box width in pixels
	pub width: u32,
	/// Box height in pixels
	pub height: u32,
}

impl BoundingBox {
	/// Creates a new bounding box.
	pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	/// Creates a box of the given size anchored at the origin.
	pub const fn sized(width: u32, height: u32) -> Self {
		Self::new(0, 0, width, height)
	}

	/// Right edge (exclusive).
	pub fn right(&self) -> i64 {
		i64::from(self.left) + i64::from(self.width)
	}

	/// Bottom edge (exclusive).
	pub fn bottom(&self) -> i64 {
		i64::from(self.top) + i64::from(self.height)
	}

	/// Number of pixels covered by the box.
	pub fn area(&self) -> u64 {
		u64::from(self.width) * u64::from(self.height)
	}
}

impl fmt::Display for BoundingBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{} at ({}, {})", self.width, self.height, self.left, self.top)
	}
}

/// One direction of an animation set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
	bounds: BoundingBox,
	frames: Vec<Frame>,
}

impl Direction {
	/// Creates a direction from its bounding box and frames.
	///
	/// # Errors
	///
	/// - [`AnimError::EmptyDirection`] if `frames` is empty
	/// - [`AnimError::FrameSizeMismatch`] if a frame is not the size of `bounds`
	pub fn new(bounds: BoundingBox, frames: Vec<Frame>) -> Result<Self, AnimError> {
		if frames.is_empty() {
			return Err(AnimError::EmptyDirection);
		}

		for (index, frame) in frames.iter().enumerate() {
			if frame.dimensions() != (bounds.width, bounds.height) {
				return Err(AnimError::FrameSizeMismatch {
					frame: index,
					actual_width: frame.width(),
					actual_height: frame.height(),
					box_width: bounds.width,
					box_height: bounds.height,
				});
			}
		}

		Ok(Self {
			bounds,
			frames,
		})
	}

	/// Creates a direction whose box is the size of its first frame.
	pub fn from_frames(frames: Vec<Frame>) -> Result<Self, AnimError> {
		let (width, height) = frames.first().ok_or(AnimError::EmptyDirection)?.dimensions();
		Self::new(BoundingBox::sized(width, height), frames)
	}

	/// Returns the bounding box.
	pub fn bounds(&self) -> BoundingBox {
		self.bounds
	}

	/// Returns all frames in playback order.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns the number of frames (always at least 1).
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns a frame by index, or `None` when out of range.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns a frame by index, clamping to the last frame.
	pub fn frame_clamped(&self, index: usize) -> &Frame {
		&self.frames[index.min(self.frames.len() - 1)]
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Direction({} frames, box {})", self.frames.len(), self.bounds)
	}
}
