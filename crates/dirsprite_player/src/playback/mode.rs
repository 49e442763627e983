//! Playback modes.

use std::fmt::{self, Formatter};

use serde::{Deserialize, Serialize};

/// How the frame index moves on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PlayMode {
	/// `0, 1, ..., n-1`, then wrap or stop
	#[default]
	Forward = 0,
	/// `0, 1, ..., n-1, n-2, ..., 1, 0, 1, ...`
	PingPong = 1,
}

impl PlayMode {
	/// Every mode in presentation order.
	pub const ALL: [Self; 2] = [Self::Forward, Self::PingPong];

	/// Converts a u8 value to `PlayMode`.
	pub fn from_u8(value: u8) -> Option<Self> {
		match value {
			0 => Some(Self::Forward),
			1 => Some(Self::PingPong),
			_ => None,
		}
	}

	/// Converts `PlayMode` to u8.
	pub fn to_u8(self) -> u8 {
		self as u8
	}

	/// Labels of [`PlayMode::ALL`], for combo-box style selectors.
	pub fn labels() -> Vec<String> {
		Self::ALL.iter().map(ToString::to_string).collect()
	}
}

impl fmt::Display for PlayMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Forward => write!(f, "Forward"),
			Self::PingPong => write!(f, "Ping-Pong"),
		}
	}
}
