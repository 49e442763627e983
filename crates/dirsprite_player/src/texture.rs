//! Lazily uploaded frame textures.

use std::collections::HashMap;

use image::{RgbaImage, imageops};
use log::debug;

/// Uploads rasters to whatever the host renders with.
pub trait TextureLoader {
	/// Opaque handle returned by the renderer.
	type Texture;
	/// Upload failure.
	type Error: std::error::Error;

	/// Uploads `image` and returns a handle for display.
	fn load(&mut self, image: &RgbaImage) -> Result<Self::Texture, Self::Error>;
}

/// Cache key: `(direction, frame)`.
pub type TextureKey = (usize, usize);

/// Upload cache for the frames of one animation set.
///
/// Entries are created on first access and dropped as a whole by
/// [`invalidate`](Self::invalidate), which the owner calls when the set or
/// the display scale changes.
#[derive(Debug)]
pub struct TextureCache<T> {
	textures: HashMap<TextureKey, T>,
}

impl<T> TextureCache<T> {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self {
			textures: HashMap::new(),
		}
	}

	/// Returns the texture for `key`, uploading `image` scaled by `scale`
	/// when it is not cached yet.
	pub fn get_or_load<L>(
		&mut self,
		key: TextureKey,
		image: &RgbaImage,
		scale: u32,
		loader: &mut L,
	) -> Result<&T, L::Error>
	where
		L: TextureLoader<Texture = T>,
	{
		if !self.textures.contains_key(&key) {
			let texture = if scale > 1 {
				loader.load(&upscale(image, scale))?
			} else {
				loader.load(image)?
			};
			debug!("Uploaded texture for direction {} frame {} at scale {scale}", key.0, key.1);
			self.textures.insert(key, texture);
		}

		Ok(&self.textures[&key])
	}

	/// Returns a cached texture without uploading.
	pub fn get(&self, key: TextureKey) -> Option<&T> {
		self.textures.get(&key)
	}

	/// Whether `key` is cached.
	pub fn contains(&self, key: TextureKey) -> bool {
		self.textures.contains_key(&key)
	}

	/// Drops every cached texture.
	pub fn invalidate(&mut self) {
		if !self.textures.is_empty() {
			debug!("Dropping {} cached textures", self.textures.len());
		}
		self.textures.clear();
	}

	/// Number of cached textures.
	pub fn len(&self) -> usize {
		self.textures.len()
	}

	/// Whether the cache is empty.
	pub fn is_empty(&self) -> bool {
		self.textures.is_empty()
	}
}

impl<T> Default for TextureCache<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Nearest-neighbour upscale, keeping pixel edges sharp.
fn upscale(image: &RgbaImage, scale: u32) -> RgbaImage {
	imageops::resize(
		image,
		image.width() * scale,
		image.height() * scale,
		imageops::FilterType::Nearest,
	)
}
