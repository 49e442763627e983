//! GIF export checks

use dirsprite::prelude::*;

use crate::layered_set;

fn decode(path: &std::path::Path) -> Vec<(u16, Vec<u8>)> {
	let file = std::fs::File::open(path).unwrap();
	let mut options = gif::DecodeOptions::new();
	options.set_color_output(gif::ColorOutput::RGBA);
	let mut decoder = options.read_info(file).unwrap();

	let mut frames = Vec::new();
	while let Some(frame) = decoder.read_next_frame().unwrap() {
		frames.push((frame.delay, frame.buffer.to_vec()));
	}
	frames
}

#[test_log::test]
fn test_export_three_frames_at_300ms() {
	let set = layered_set(&[1, 3]);
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("walk.gif");

	let request = ExportRequest::for_direction(&set, 1, 300);
	let mut picker = FixedPath(Some(path.clone()));
	let outcome = export_gif(&request, &mut picker).unwrap();

	let ExportOutcome::Written {
		path: written,
		frames,
		bytes,
	} = outcome
	else {
		panic!("export was not written");
	};
	assert_eq!(written, path);
	assert_eq!(frames, 3);
	assert_eq!(bytes as u64, std::fs::metadata(&path).unwrap().len());

	let decoded = decode(&path);
	assert_eq!(decoded.len(), 3);
	for (index, (delay, pixels)) in decoded.iter().enumerate() {
		assert_eq!(*delay, 30);
		assert_eq!(&pixels[..4], &[40, (index * 60) as u8, 200, 255]);
	}
}

#[test_log::test]
fn test_export_overwrites_existing_file() {
	let set = layered_set(&[2]);
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("out.gif");
	std::fs::write(&path, vec![0u8; 64 * 1024]).unwrap();

	let request = ExportRequest::for_direction(&set, 0, 100);
	export_gif(&request, &mut FixedPath(Some(path.clone()))).unwrap();

	assert_eq!(decode(&path).len(), 2);
	assert!(std::fs::metadata(&path).unwrap().len() < 64 * 1024);
}

#[test_log::test]
fn test_cancelled_export_leaves_no_file() {
	let set = layered_set(&[3]);
	let dir = tempfile::tempdir().unwrap();

	let request = ExportRequest::for_direction(&set, 0, 100);
	let mut picker = || None;
	assert_eq!(export_gif(&request, &mut picker).unwrap(), ExportOutcome::DestinationNotSelected);
	assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test_log::test]
fn test_unwritable_destination_is_write_error() {
	let set = layered_set(&[1]);
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("no_such_dir").join("out.gif");

	let request = ExportRequest::for_direction(&set, 0, 100);
	let err = export_gif(&request, &mut FixedPath(Some(path.clone()))).unwrap_err();
	assert!(matches!(err, ExportError::Write { path: ref failed, .. } if *failed == path));
	assert!(!path.exists());
}
