//! Benchmark helper utilities for dirsprite
//!
//! Generates synthetic palette-indexed animation sets so the benchmarks run
//! without any asset files.

use dirsprite_types::anim::{AnimationSet, BoundingBox, Direction, Frame, Palette};

/// Generates a set of `directions` directions with `frames` frames each.
///
/// Every frame is a `width` x `height` gradient over a grayscale palette,
/// shifted per frame so consecutive frames differ. Index 0 stays transparent.
pub fn generate_animation_set(directions: usize, frames: usize, width: u32, height: u32) -> AnimationSet {
	let palette = Palette::grayscale();
	let mut result = Vec::with_capacity(directions);

	for direction in 0..directions {
		let mut sequence = Vec::with_capacity(frames);
		for frame in 0..frames {
			let indices: Vec<u8> = (0..width * height)
				.map(|i| ((i as usize + frame * 7 + direction * 13) % 256) as u8)
				.collect();
			let frame = Frame::from_indexed(width, height, &indices, &palette)
				.unwrap_or_else(|e| panic!("synthetic frame is invalid: {e}"));
			sequence.push(frame);
		}

		let bounds = BoundingBox::new(-(width as i32) / 2, -(height as i32), width, height);
		let direction = Direction::new(bounds, sequence)
			.unwrap_or_else(|e| panic!("synthetic direction is invalid: {e}"));
		result.push(direction);
	}

	AnimationSet::new(result).unwrap_or_else(|e| panic!("synthetic set is invalid: {e}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_animation_set() {
		let set = generate_animation_set(8, 4, 16, 24);
		assert_eq!(set.direction_count(), 8);
		assert_eq!(set.frames_per_direction(), 4);
		assert_eq!(set.direction_clamped(0).frame_clamped(0).dimensions(), (16, 24));
	}
}
