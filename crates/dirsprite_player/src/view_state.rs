//! Persisted panel configuration.
//!
//! The host stores the blob returned by [`ViewState::encode`] when a panel is
//! torn down and hands it back on creation. The content is opaque to the
//! host; only this crate reads it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::playback::{PlayMode, PlayerOptions};

/// Errors that can occur when reading a persisted view state.
#[derive(Debug, Error)]
pub enum ViewStateError {
	/// Blob is not a valid view state
	#[error("Invalid view state: {0}")]
	Malformed(#[from] serde_json::Error),
}

/// User-configurable playback settings plus the current position.
///
/// Fields are stored as they were; clamping happens when the state is
/// applied to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
	/// Selected direction
	pub direction: u32,
	/// Frame within the direction
	pub frame: u32,
	/// Display scale
	pub scale: u32,
	/// Whether playback wraps around
	pub repeat: bool,
	/// Play mode
	pub play_mode: PlayMode,
	/// Tick interval in milliseconds
	pub tick_ms: u32,
}

impl ViewState {
	/// Serialises the state into an opaque blob.
	pub fn encode(&self) -> Vec<u8> {
		// Serialising plain integers, bools and a unit enum cannot fail.
		serde_json::to_vec(self).unwrap_or_default()
	}

	/// Restores a state from a blob produced by [`ViewState::encode`].
	///
	/// Missing fields take their defaults, unknown fields are ignored.
	pub fn decode(data: &[u8]) -> Result<Self, ViewStateError> {
		Ok(serde_json::from_slice(data)?)
	}
}

impl Default for ViewState {
	fn default() -> Self {
		Self::from(&PlayerOptions::default())
	}
}

impl From<&PlayerOptions> for ViewState {
	fn from(options: &PlayerOptions) -> Self {
		Self {
			direction: 0,
			frame: 0,
			scale: options.scale,
			repeat: options.repeat,
			play_mode: options.play_mode,
			tick_ms: options.tick_ms,
		}
	}
}
