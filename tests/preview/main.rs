//! Preview player tests for `dirsprite`

mod export;
mod panel;
mod playback;

use dirsprite::prelude::*;
use image::{Rgba, RgbaImage};

/// Solid-color frame
pub(crate) fn solid(width: u32, height: u32, color: [u8; 4]) -> Frame {
	Frame::from_image(RgbaImage::from_pixel(width, height, Rgba(color)))
}

/// Set whose direction `d` has `counts[d]` frames of 4x3 pixels, each frame
/// colored by its position so exported order can be checked.
pub(crate) fn layered_set(counts: &[usize]) -> AnimationSet {
	let directions = counts
		.iter()
		.enumerate()
		.map(|(d, &count)| {
			let frames =
				(0..count).map(|f| solid(4, 3, [(d * 40) as u8, (f * 60) as u8, 200, 255])).collect();
			Direction::new(BoundingBox::new(-2, -3, 4, 3), frames).unwrap()
		})
		.collect();
	AnimationSet::with_header(
		Header {
			signature: 116,
			version: 6,
		},
		directions,
	)
	.unwrap()
}
