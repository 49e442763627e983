//! Animation sets: every direction of one decoded sprite resource.

use std::fmt;

use super::direction::Direction;
use crate::error::AnimError;

/// Header values carried over from the decoded resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
	/// Format signature byte
	pub signature: u8,
	/// Format version
	pub version: u8,
}

/// A decoded directional animation.
///
/// Immutable once built. Holds at least one direction and every direction
/// holds at least one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSet {
	header: Header,
	directions: Vec<Direction>,
}

impl AnimationSet {
	/// Creates an animation set with a default header.
	///
	/// # Errors
	///
	/// Returns [`AnimError::EmptyAnimation`] when `directions` is empty.
	pub fn new(directions: Vec<Direction>) -> Result<Self, AnimError> {
		Self::with_header(Header::default(), directions)
	}

	/// Creates an animation set with the given header.
	pub fn with_header(header: Header, directions: Vec<Direction>) -> Result<Self, AnimError> {
		if directions.is_empty() {
			return Err(AnimError::EmptyAnimation);
		}

		Ok(Self {
			header,
			directions,
		})
	}

	/// Returns the header.
	pub fn header(&self) -> Header {
		self.header
	}

	/// Returns all directions.
	pub fn directions(&self) -> &[Direction] {
		&self.directions
	}

	/// Returns the number of directions (always at least 1).
	pub fn direction_count(&self) -> usize {
		self.directions.len()
	}

	/// Returns a direction by index, or `None` when out of range.
	pub fn direction(&self, index: usize) -> Option<&Direction> {
		self.directions.get(index)
	}

	/// Returns a direction by index, clamping to the last direction.
	pub fn direction_clamped(&self, index: usize) -> &Direction {
		&self.directions[self.clamp_direction(index)]
	}

	/// Clamps a direction index into range.
	pub fn clamp_direction(&self, index: usize) -> usize {
		index.min(self.directions.len() - 1)
	}

	/// Number of frames in each direction, in direction order.
	pub fn frame_counts(&self) -> Vec<usize> {
		self.directions.iter().map(Direction::frame_count).collect()
	}

	/// Largest frame count over all directions.
	pub fn frames_per_direction(&self) -> usize {
		self.directions.iter().map(Direction::frame_count).max().unwrap_or(0)
	}

	/// Total number of frames over all directions.
	pub fn total_frames(&self) -> usize {
		self.directions.iter().map(Direction::frame_count).sum()
	}
}

impl fmt::Display for AnimationSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"AnimationSet(signature {}, version {}, {} directions, {} frames per direction)",
			self.header.signature,
			self.header.version,
			self.direction_count(),
			self.frames_per_direction()
		)
	}
}
