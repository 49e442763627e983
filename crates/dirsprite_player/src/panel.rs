//! Animation preview panel.
//!
//! [`AnimationPanel`] is the state a host UI keeps for one open sprite
//! resource. The decoded [`AnimationSet`], the [`Player`] and the texture
//! cache live here for the lifetime of the panel; the host redraws from it
//! every frame and feeds user input back through the control setters.
//!
//! ```
//! use std::convert::Infallible;
//! use std::time::Duration;
//! use dirsprite_player::panel::AnimationPanel;
//! use dirsprite_player::texture::TextureLoader;
//! use dirsprite_types::anim::{AnimationSet, Direction, Frame};
//! use image::RgbaImage;
//!
//! struct Sizes;
//!
//! impl TextureLoader for Sizes {
//!     type Texture = (u32, u32);
//!     type Error = Infallible;
//!
//!     fn load(&mut self, image: &RgbaImage) -> Result<(u32, u32), Infallible> {
//!         Ok(image.dimensions())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = vec![Frame::from_image(RgbaImage::new(16, 24)); 4];
//! let set = AnimationSet::new(vec![Direction::from_frames(frames)?])?;
//!
//! let mut panel = AnimationPanel::new("walk", set, Sizes, None);
//! panel.set_scale(2);
//! panel.play();
//! panel.update(Duration::from_millis(100));
//!
//! assert_eq!(panel.state().frame(), 1);
//! assert_eq!(panel.current_texture(), Some(&(32, 48)));
//! assert_eq!(panel.display_size(), (32, 48));
//!
//! let saved = panel.save_state();
//! # let _ = saved;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use dirsprite_types::anim::{AnimationSet, Direction};
use log::{error, warn};

use crate::export::{self, ExportOutcome, ExportRequest, NotificationSink, SavePathPicker};
use crate::playback::{PlayMode, PlaybackState, Player, PlayerOptions};
use crate::texture::{TextureCache, TextureLoader};
use crate::view_state::ViewState;

/// Size shown when no texture is available for the current frame.
pub const PLACEHOLDER_SIZE: (u32, u32) = (32, 32);

/// Header labels shown above the playback controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSummary {
	/// Format signature
	pub signature: u8,
	/// Format version
	pub version: u8,
	/// Number of directions
	pub directions: usize,
	/// Largest number of frames in one direction
	pub frames_per_direction: usize,
}

impl fmt::Display for PanelSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Signature: {}  Version: {}", self.signature, self.version)?;
		write!(
			f,
			"Directions: {}  Frames per Direction: {}",
			self.directions, self.frames_per_direction
		)
	}
}

/// Preview state for one animation set.
pub struct AnimationPanel<L: TextureLoader> {
	id: String,
	set: AnimationSet,
	player: Player,
	textures: TextureCache<L::Texture>,
	loader: L,
}

impl<L: TextureLoader> AnimationPanel<L> {
	/// Creates a panel with default player options.
	///
	/// `state` is a blob previously returned by [`save_state`](Self::save_state);
	/// a blob that cannot be read is logged and ignored.
	pub fn new(id: impl Into<String>, set: AnimationSet, loader: L, state: Option<&[u8]>) -> Self {
		Self::with_options(id, set, loader, state, &PlayerOptions::default())
	}

	/// Creates a panel whose player starts from `options`.
	pub fn with_options(
		id: impl Into<String>,
		set: AnimationSet,
		loader: L,
		state: Option<&[u8]>,
		options: &PlayerOptions,
	) -> Self {
		let id = id.into();
		let mut player = Player::for_set(&set, options);

		if let Some(blob) = state {
			match ViewState::decode(blob) {
				Ok(view) => player.restore(&view),
				Err(e) => warn!("Panel {id}: discarding saved state: {e}"),
			}
		}

		Self {
			id,
			set,
			player,
			textures: TextureCache::new(),
			loader,
		}
	}

	/// Panel identifier.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// The previewed animation set.
	pub fn animation(&self) -> &AnimationSet {
		&self.set
	}

	/// Current playback values.
	pub fn state(&self) -> &PlaybackState {
		self.player.state()
	}

	/// The playback state machine.
	pub fn player(&self) -> &Player {
		&self.player
	}

	/// The texture loader.
	pub fn loader(&self) -> &L {
		&self.loader
	}

	/// Number of textures currently uploaded.
	pub fn cached_textures(&self) -> usize {
		self.textures.len()
	}

	/// Header labels for the panel.
	pub fn summary(&self) -> PanelSummary {
		let header = self.set.header();
		PanelSummary {
			signature: header.signature,
			version: header.version,
			directions: self.set.direction_count(),
			frames_per_direction: self.set.frames_per_direction(),
		}
	}

	/// Labels for the play mode selector, in [`PlayMode::ALL`] order.
	pub fn play_mode_labels(&self) -> Vec<String> {
		PlayMode::labels()
	}

	/// The selected direction.
	pub fn current_direction(&self) -> &Direction {
		self.set.direction_clamped(self.player.state().direction())
	}

	/// Replaces the previewed animation, e.g. after the resource was decoded
	/// again. Uploaded textures are dropped and the position is re-clamped.
	pub fn replace_animation(&mut self, set: AnimationSet) {
		let view = self.player.view_state();
		let playing = self.player.state().is_playing();

		self.set = set;
		self.textures.invalidate();
		self.player = Player::for_set(&self.set, &PlayerOptions::default());
		self.player.restore(&view);
		self.player.set_playing(playing);
	}

	/// Advances playback by the time elapsed since the previous redraw.
	pub fn update(&mut self, elapsed: Duration) -> bool {
		self.player.update(elapsed)
	}

	/// Texture of the current frame, uploaded on first use.
	///
	/// Upload failures are logged; the panel then shows the placeholder.
	pub fn current_texture(&mut self) -> Option<&L::Texture> {
		let state = *self.player.state();
		let key = (state.direction(), state.frame());
		let image = self.set.direction_clamped(key.0).frame_clamped(key.1).image();

		match self.textures.get_or_load(key, image, state.scale(), &mut self.loader) {
			Ok(texture) => Some(texture),
			Err(e) => {
				error!(
					"Panel {}: cannot upload direction {} frame {}: {e}",
					self.id, key.0, key.1
				);
				None
			}
		}
	}

	/// Display size of the current frame in pixels.
	///
	/// The direction bounding box times the scale, or [`PLACEHOLDER_SIZE`]
	/// when no texture has been uploaded for the current frame.
	pub fn display_size(&self) -> (u32, u32) {
		let state = self.player.state();
		if !self.textures.contains((state.direction(), state.frame())) {
			return PLACEHOLDER_SIZE;
		}

		let bounds = self.current_direction().bounds();
		(bounds.width.saturating_mul(state.scale()), bounds.height.saturating_mul(state.scale()))
	}

	/// Starts playback.
	pub fn play(&mut self) {
		self.player.play();
	}

	/// Stops playback.
	pub fn pause(&mut self) {
		self.player.pause();
	}

	/// Play/pause button.
	pub fn toggle_playing(&mut self) {
		self.player.toggle_playing();
	}

	/// Direction slider.
	pub fn set_direction(&mut self, direction: usize) {
		self.player.set_direction(direction);
	}

	/// Frame slider.
	pub fn set_frame(&mut self, frame: usize) {
		self.player.set_frame(frame);
	}

	/// Scale slider; drops uploaded textures when the scale changes.
	pub fn set_scale(&mut self, scale: u32) {
		if self.player.set_scale(scale) {
			self.textures.invalidate();
		}
	}

	/// Loop checkbox.
	pub fn set_repeat(&mut self, repeat: bool) {
		self.player.set_repeat(repeat);
	}

	/// Play mode selector.
	pub fn set_play_mode(&mut self, mode: PlayMode) {
		self.player.set_play_mode(mode);
	}

	/// Tick time input, in milliseconds.
	pub fn set_tick_interval(&mut self, ms: u32) {
		self.player.set_tick_interval(ms);
	}

	/// Export button.
	///
	/// Exports the selected direction with the current tick interval as
	/// frame delay. Returns the written path; a cancelled picker returns
	/// `None` silently, and failures are reported once through `sink`.
	pub fn export_gif(
		&self,
		picker: &mut dyn SavePathPicker,
		sink: &mut dyn NotificationSink,
	) -> Option<PathBuf> {
		let state = self.player.state();
		let request =
			ExportRequest::for_direction(&self.set, state.direction(), state.tick_interval_ms());

		match export::export_gif(&request, picker) {
			Ok(ExportOutcome::Written {
				path,
				..
			}) => Some(path),
			Ok(ExportOutcome::DestinationNotSelected) => None,
			Err(e) => {
				sink.notify_error(&format!("error while creating gif: {e}"));
				None
			}
		}
	}

	/// Serialises the persistable settings for the host to store.
	pub fn save_state(&self) -> Vec<u8> {
		self.player.view_state().encode()
	}
}

impl<L: TextureLoader> fmt::Debug for AnimationPanel<L> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AnimationPanel")
			.field("id", &self.id)
			.field("set", &self.set.to_string())
			.field("state", self.player.state())
			.field("cached_textures", &self.textures.len())
			.finish_non_exhaustive()
	}
}
