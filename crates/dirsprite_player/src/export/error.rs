//! Export error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting a direction as GIF.
///
/// Each variant names the stage that failed. A cancelled path selection is
/// not an error; see [`ExportOutcome::DestinationNotSelected`](super::ExportOutcome).
#[derive(Debug, Error)]
pub enum ExportError {
	/// Nothing to export
	#[error("No frames to export")]
	EmptySequence,

	/// Frame cannot be represented in a GIF
	#[error("Frame {index} is {width}x{height}, GIF frames must be between 1x1 and 65535x65535")]
	InvalidFrameSize {
		/// Frame index within the sequence
		index: usize,
		/// Frame width
		width: u32,
		/// Frame height
		height: u32,
	},

	/// GIF encoding failed
	#[error("Failed to encode GIF: {0}")]
	Encode(#[from] gif::EncodingError),

	/// Opening or writing the output file failed
	#[error("Failed to write GIF to {}: {source}", path.display())]
	Write {
		/// Output path
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// Flushing and closing the output file failed
	#[error("Failed to close GIF file {}: {source}", path.display())]
	Close {
		/// Output path
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},
}
