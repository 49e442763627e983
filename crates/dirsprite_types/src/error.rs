//! Error types for building animation sets from decoded data.

use thiserror::Error;

/// Errors that can occur when assembling palettes, frames, directions, or
/// animation sets.
#[derive(Debug, Error)]
pub enum AnimError {
	/// Not enough data to parse
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Indexed pixel buffer does not match the frame dimensions
	#[error("Pixel count mismatch: {width}x{height} frame needs {expected} pixels, got {actual}")]
	PixelCountMismatch {
		/// Frame width
		width: u32,
		/// Frame height
		height: u32,
		/// Expected number of pixels
		expected: usize,
		/// Actual number of pixels
		actual: usize,
	},

	/// Frame size does not match the bounding box of its direction
	#[error(
		"Frame {frame} is {actual_width}x{actual_height}, but the direction box is {box_width}x{box_height}"
	)]
	FrameSizeMismatch {
		/// Frame index within the direction
		frame: usize,
		/// Width of the offending frame
		actual_width: u32,
		/// Height of the offending frame
		actual_height: u32,
		/// Bounding box width
		box_width: u32,
		/// Bounding box height
		box_height: u32,
	},

	/// A direction without any frame
	#[error("Direction has no frames")]
	EmptyDirection,

	/// An animation set without any direction
	#[error("Animation set has no directions")]
	EmptyAnimation,

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
