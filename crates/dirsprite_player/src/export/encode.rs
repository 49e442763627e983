//! GIF encoding and file output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use gif::{DisposalMethod, Encoder, Frame as GifFrame, Repeat};
use log::debug;

use super::{ExportError, ExportRequest};

/// NeuQuant speed used when a frame has more than 256 colors.
const QUANTIZE_SPEED: i32 = 10;

/// Encodes the request into an in-memory looping GIF.
///
/// The logical screen is as large as the largest frame; every frame is
/// placed at the top-left corner. Frames with at most 256 distinct colors,
/// which covers every palette-decoded frame, keep their colors exactly.
/// Fully transparent pixels map to the GIF transparent index.
pub fn encode_gif(request: &ExportRequest<'_>) -> Result<Vec<u8>, ExportError> {
	if request.frames.is_empty() {
		return Err(ExportError::EmptySequence);
	}

	let mut sizes = Vec::with_capacity(request.frames.len());
	for (index, frame) in request.frames.iter().enumerate() {
		let (width, height) = frame.dimensions();
		match (u16::try_from(width), u16::try_from(height)) {
			(Ok(w), Ok(h)) if w > 0 && h > 0 => sizes.push((w, h)),
			_ => {
				return Err(ExportError::InvalidFrameSize {
					index,
					width,
					height,
				});
			}
		}
	}

	let screen_width = sizes.iter().map(|&(w, _)| w).max().unwrap_or(1);
	let screen_height = sizes.iter().map(|&(_, h)| h).max().unwrap_or(1);
	let delay = request.delay_centis();

	debug!(
		"Encoding {} frames of direction {} ({}x{}, delay {} cs)",
		request.frames.len(),
		request.direction,
		screen_width,
		screen_height,
		delay
	);

	let mut buffer = Vec::new();
	{
		let mut encoder = Encoder::new(&mut buffer, screen_width, screen_height, &[])?;
		encoder.set_repeat(Repeat::Infinite)?;

		for (frame, &(width, height)) in request.frames.iter().zip(&sizes) {
			let mut pixels = frame.image().as_raw().clone();
			let mut gif_frame = GifFrame::from_rgba_speed(width, height, &mut pixels, QUANTIZE_SPEED);
			gif_frame.delay = delay;
			gif_frame.dispose = DisposalMethod::Background;
			encoder.write_frame(&gif_frame)?;
		}

		encoder.into_inner().map_err(gif::EncodingError::from)?;
	}

	Ok(buffer)
}

/// Writes encoded GIF bytes to `path`, creating or truncating the file.
///
/// The file is flushed to disk before returning; it is closed on every
/// exit path.
pub fn write_gif(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
	let mut file = OpenOptions::new().write(true).create(true).truncate(true).open(path).map_err(
		|source| ExportError::Write {
			path: path.to_path_buf(),
			source,
		},
	)?;

	file.write_all(bytes).map_err(|source| ExportError::Write {
		path: path.to_path_buf(),
		source,
	})?;

	file.sync_all().map_err(|source| ExportError::Close {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(())
}
