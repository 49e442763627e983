//! Palette support.
//!
//! Decoded sprite frames are palette-indexed; a 256-color palette turns
//! them into full-color rasters. Palette files hold 256 RGB triplets.

use std::fmt;
use std::io::Read;
use std::path::Path;

use image::Rgba;

use crate::error::AnimError;

/// One palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
	/// Red
	pub r: u8,
	/// Green
	pub g: u8,
	/// Blue
	pub b: u8,
	/// Alpha, 0 is fully transparent
	pub a: u8,
}

impl Color {
	/// Creates a color from all four channels.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates an opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, u8::MAX)
	}

	/// Creates an opaque gray of the given level.
	pub const fn gray(level: u8) -> Self {
		Self::rgb(level, level, level)
	}

	/// Transparent black, the color of unused palette slots.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Packs the channels as `0xRRGGBBAA`.
	pub const fn to_rgba32(self) -> u32 {
		u32::from_be_bytes([self.r, self.g, self.b, self.a])
	}

	/// Unpacks a `0xRRGGBBAA` value.
	pub const fn from_rgba32(rgba: u32) -> Self {
		let [r, g, b, a] = rgba.to_be_bytes();
		Self::new(r, g, b, a)
	}

	/// Whether the color is fully transparent.
	pub const fn is_transparent(self) -> bool {
		self.a == 0
	}
}

impl From<Color> for Rgba<u8> {
	fn from(color: Color) -> Self {
		Rgba([color.r, color.g, color.b, color.a])
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:08X}", self.to_rgba32())
	}
}

/// 256-color palette used to turn indexed pixels into colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; Self::LEN],
}

impl Palette {
	/// Number of entries
	pub const LEN: usize = 256;

	/// Size of a palette file: one RGB triplet per entry
	pub const FILE_SIZE: usize = Self::LEN * 3;

	/// Index rendered as transparent by [`Frame::from_indexed`](super::Frame::from_indexed)
	pub const TRANSPARENT_INDEX: u8 = 0;

	/// Palette with every entry transparent.
	pub fn new() -> Self {
		Self {
			colors: [Color::transparent(); Self::LEN],
		}
	}

	/// Palette mapping each index to the gray level of the same value.
	///
	/// Used when an animation comes without its own palette.
	pub fn grayscale() -> Self {
		Self {
			colors: std::array::from_fn(|i| Color::gray(i as u8)),
		}
	}

	/// Reads a palette file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnimError> {
		let mut file = std::fs::File::open(path)?;
		Self::from_reader(&mut file)
	}

	/// Parses the first [`FILE_SIZE`](Self::FILE_SIZE) bytes of `data`.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AnimError> {
		let Some(table) = data.get(..Self::FILE_SIZE) else {
			return Err(AnimError::InsufficientData {
				expected: Self::FILE_SIZE,
				actual: data.len(),
			});
		};

		let mut palette = Self::new();
		for (color, rgb) in palette.colors.iter_mut().zip(table.chunks_exact(3)) {
			*color = Color::rgb(rgb[0], rgb[1], rgb[2]);
		}
		Ok(palette)
	}

	/// Reads exactly one color table from `reader`.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, AnimError> {
		let mut table = [0u8; Self::FILE_SIZE];
		let mut filled = 0;
		while filled < table.len() {
			match reader.read(&mut table[filled..])? {
				0 => {
					return Err(AnimError::InsufficientData {
						expected: Self::FILE_SIZE,
						actual: filled,
					});
				}
				n => filled += n,
			}
		}
		Self::from_bytes(&table)
	}

	/// Serialises the palette as a palette file; alpha is not stored.
	pub fn to_bytes(&self) -> Vec<u8> {
		self.colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
	}

	/// Color at `index`.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[usize::from(index)]
	}

	/// Replaces the color at `index`.
	#[inline]
	pub fn set(&mut self, index: u8, color: Color) {
		self.colors[usize::from(index)] = color;
	}

	/// Iterates the entries in index order.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let opaque = self.iter().filter(|c| !c.is_transparent()).count();
		write!(f, "Palette ({opaque}/{} opaque)", Self::LEN)
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[usize::from(index)]
	}
}

impl std::ops::IndexMut<u8> for Palette {
	fn index_mut(&mut self, index: u8) -> &mut Self::Output {
		&mut self.colors[usize::from(index)]
	}
}
