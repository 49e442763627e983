//! Animated GIF export of one direction.
//!
//! Export runs synchronously on the caller's thread: the output path is
//! requested from a [`SavePathPicker`], the frames of the selected direction
//! are re-encoded into a looping GIF in memory, and the result is written to
//! the chosen file. Playback state is never touched.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use dirsprite_player::export::{ExportOutcome, ExportRequest, export_gif};
//! # use dirsprite_types::anim::AnimationSet;
//!
//! # fn run(set: &AnimationSet) -> Result<(), Box<dyn std::error::Error>> {
//! let request = ExportRequest::for_direction(set, 2, 120);
//! let mut picker = || Some(PathBuf::from("walk_south.gif"));
//!
//! match export_gif(&request, &mut picker)? {
//!     ExportOutcome::Written { path, .. } => println!("saved {}", path.display()),
//!     ExportOutcome::DestinationNotSelected => {}
//! }
//! # Ok(())
//! # }
//! ```

mod encode;
mod error;

use std::path::{Path, PathBuf};

use dirsprite_types::anim::{AnimationSet, Frame};
use log::{error, info};

pub use encode::{encode_gif, write_gif};
pub use error::ExportError;

/// Frames of one direction and the delay to play them with.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
	/// Direction the frames belong to
	pub direction: usize,
	/// Frames in playback order
	pub frames: &'a [Frame],
	/// Delay between frames in milliseconds
	pub delay_ms: u32,
}

impl<'a> ExportRequest<'a> {
	/// Creates a request from explicit parts.
	pub fn new(direction: usize, frames: &'a [Frame], delay_ms: u32) -> Self {
		Self {
			direction,
			frames,
			delay_ms,
		}
	}

	/// Creates a request for every frame of `direction`, clamped to the last
	/// direction of `set`.
	pub fn for_direction(set: &'a AnimationSet, direction: usize, delay_ms: u32) -> Self {
		let direction = set.clamp_direction(direction);
		Self::new(direction, set.direction_clamped(direction).frames(), delay_ms)
	}

	/// Per-frame delay in GIF units (hundredths of a second).
	///
	/// Delays shorter than 10 ms round up to the smallest unit, 1.
	pub fn delay_centis(&self) -> u16 {
		u16::try_from(self.delay_ms / 10).unwrap_or(u16::MAX).max(1)
	}
}

/// Result of an export that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
	/// File written
	Written {
		/// Output path
		path: PathBuf,
		/// Number of frames in the file
		frames: usize,
		/// File size in bytes
		bytes: usize,
	},
	/// The user dismissed the path selection; nothing was written
	DestinationNotSelected,
}

/// Asks the user where to save the file.
pub trait SavePathPicker {
	/// Returns the chosen path, or `None` when the user cancelled.
	fn pick_save_path(&mut self) -> Option<PathBuf>;
}

impl<F> SavePathPicker for F
where
	F: FnMut() -> Option<PathBuf>,
{
	fn pick_save_path(&mut self) -> Option<PathBuf> {
		self()
	}
}

/// Picker answering with a path decided up front.
#[derive(Debug, Clone, Default)]
pub struct FixedPath(pub Option<PathBuf>);

impl SavePathPicker for FixedPath {
	fn pick_save_path(&mut self) -> Option<PathBuf> {
		self.0.clone()
	}
}

/// Receives export failures for presentation to the user.
pub trait NotificationSink {
	/// Reports one failure.
	fn notify_error(&mut self, message: &str);
}

impl<F> NotificationSink for F
where
	F: FnMut(&str),
{
	fn notify_error(&mut self, message: &str) {
		self(message);
	}
}

/// Sink forwarding failures to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
	fn notify_error(&mut self, message: &str) {
		error!("{message}");
	}
}

/// Asks `picker` for a destination, then encodes and writes the request.
///
/// Returns [`ExportOutcome::DestinationNotSelected`] without encoding
/// anything when the picker is cancelled.
pub fn export_gif(
	request: &ExportRequest<'_>,
	picker: &mut dyn SavePathPicker,
) -> Result<ExportOutcome, ExportError> {
	let Some(path) = picker.pick_save_path() else {
		return Ok(ExportOutcome::DestinationNotSelected);
	};
	export_gif_to(request, &path)
}

/// Encodes and writes the request to `path`.
pub fn export_gif_to(request: &ExportRequest<'_>, path: &Path) -> Result<ExportOutcome, ExportError> {
	let bytes = encode_gif(request)?;
	write_gif(path, &bytes)?;

	info!(
		"Exported direction {} ({} frames, {} bytes) to {}",
		request.direction,
		request.frames.len(),
		bytes.len(),
		path.display()
	);

	Ok(ExportOutcome::Written {
		path: path.to_path_buf(),
		frames: request.frames.len(),
		bytes: bytes.len(),
	})
}
