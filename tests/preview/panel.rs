//! Preview panel checks

use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Duration;

use dirsprite::prelude::*;
use image::RgbaImage;

use crate::layered_set;

/// Loader recording the size of every upload
#[derive(Default)]
struct SizeLoader {
	uploads: Vec<(u32, u32)>,
}

impl TextureLoader for SizeLoader {
	type Texture = (u32, u32);
	type Error = Infallible;

	fn load(&mut self, image: &RgbaImage) -> Result<Self::Texture, Self::Error> {
		self.uploads.push(image.dimensions());
		Ok(image.dimensions())
	}
}

#[test_log::test]
fn test_export_uses_current_direction_and_interval() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("panel.gif");

	let mut panel = AnimationPanel::new("walk", layered_set(&[2, 3]), SizeLoader::default(), None);
	panel.set_direction(1);
	panel.set_tick_interval(250);

	let mut errors: Vec<String> = Vec::new();
	let mut sink = |message: &str| errors.push(message.to_string());
	let written = panel.export_gif(&mut FixedPath(Some(path.clone())), &mut sink);
	assert_eq!(written, Some(path.clone()));
	assert!(errors.is_empty());

	let mut decoder = gif::DecodeOptions::new().read_info(std::fs::File::open(&path).unwrap()).unwrap();
	let mut delays = Vec::new();
	while let Some(frame) = decoder.read_next_frame().unwrap() {
		delays.push(frame.delay);
	}
	assert_eq!(delays, vec![25, 25, 25]);
}

#[test_log::test]
fn test_cancelled_export_is_silent() {
	let panel = AnimationPanel::new("walk", layered_set(&[3]), SizeLoader::default(), None);
	let mut errors: Vec<String> = Vec::new();
	let mut sink = |message: &str| errors.push(message.to_string());
	let mut picker = || -> Option<PathBuf> { None };

	assert_eq!(panel.export_gif(&mut picker, &mut sink), None);
	assert!(errors.is_empty());
}

#[test_log::test]
fn test_failed_export_notifies_once() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing").join("panel.gif");

	let panel = AnimationPanel::new("walk", layered_set(&[3]), SizeLoader::default(), None);
	let mut errors: Vec<String> = Vec::new();
	let mut sink = |message: &str| errors.push(message.to_string());

	assert_eq!(panel.export_gif(&mut FixedPath(Some(path)), &mut sink), None);
	assert_eq!(errors.len(), 1);
	assert!(errors[0].starts_with("error while creating gif"));
}

#[test_log::test]
fn test_scale_change_reuploads_scaled_frame() {
	let mut panel = AnimationPanel::new("walk", layered_set(&[2]), SizeLoader::default(), None);
	assert_eq!(panel.display_size(), (32, 32));

	assert_eq!(panel.current_texture(), Some(&(4, 3)));
	assert_eq!(panel.display_size(), (4, 3));

	panel.set_scale(3);
	assert_eq!(panel.cached_textures(), 0);
	assert_eq!(panel.current_texture(), Some(&(12, 9)));
	assert_eq!(panel.display_size(), (12, 9));
	assert_eq!(panel.loader().uploads, vec![(4, 3), (12, 9)]);
}

#[test_log::test]
fn test_state_survives_panel_recreation() {
	let mut panel = AnimationPanel::new("walk", layered_set(&[2, 5]), SizeLoader::default(), None);
	panel.set_direction(1);
	panel.set_frame(3);
	panel.set_scale(2);
	panel.set_repeat(false);
	panel.set_play_mode(PlayMode::PingPong);
	panel.set_tick_interval(40);
	panel.play();
	let blob = panel.save_state();

	let restored = AnimationPanel::new("walk", layered_set(&[2, 5]), SizeLoader::default(), Some(&blob));
	let state = restored.state();
	assert_eq!(state.direction(), 1);
	assert_eq!(state.frame(), 3);
	assert_eq!(state.scale(), 2);
	assert!(!state.repeat());
	assert_eq!(state.play_mode(), PlayMode::PingPong);
	assert_eq!(state.tick_interval_ms(), 40);
	assert!(!state.is_playing());
}

#[test_log::test]
fn test_panel_playback_advances_frames() {
	let mut panel = AnimationPanel::new("walk", layered_set(&[3]), SizeLoader::default(), None);
	panel.toggle_playing();
	assert!(panel.update(Duration::from_millis(100)));
	assert_eq!(panel.state().frame(), 1);

	panel.toggle_playing();
	assert!(!panel.update(Duration::from_millis(100)));
	assert_eq!(panel.summary().to_string().lines().count(), 2);
}
