//! Default playback settings.

use serde::{Deserialize, Serialize};

use super::mode::PlayMode;

/// Settings a freshly created player starts with.
///
/// Deserialisable so hosts can layer it from configuration files; missing
/// fields fall back to [`PlayerOptions::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerOptions {
	/// Initial display scale
	pub scale: u32,
	/// Whether playback wraps around
	pub repeat: bool,
	/// Initial play mode
	pub play_mode: PlayMode,
	/// Tick interval in milliseconds
	pub tick_ms: u32,
	/// Start playing immediately
	pub autoplay: bool,
}

impl Default for PlayerOptions {
	fn default() -> Self {
		Self {
			scale: 1,
			repeat: true,
			play_mode: PlayMode::Forward,
			tick_ms: 100,
			autoplay: false,
		}
	}
}
