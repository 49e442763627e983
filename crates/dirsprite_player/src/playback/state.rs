//! Playback state and the tick state machine.

use std::fmt;
use std::time::Duration;

use dirsprite_types::anim::AnimationSet;
use log::{debug, warn};

use super::{mode::PlayMode, options::PlayerOptions, ticker::Ticker};
use crate::view_state::ViewState;

/// Smallest display scale.
pub const MIN_SCALE: u32 = 1;

/// Largest display scale.
pub const MAX_SCALE: u32 = 8;

/// Whether the player is advancing frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	/// Frame index only changes through user control
	Stopped,
	/// Frame index advances on every tick
	Playing,
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Stopped => write!(f, "Stopped"),
			Self::Playing => write!(f, "Playing"),
		}
	}
}

/// Current playback values.
///
/// Only [`Player`] mutates this; readers get it through [`Player::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
	direction: usize,
	frame: usize,
	scale: u32,
	repeat: bool,
	play_mode: PlayMode,
	tick_interval_ms: u32,
	is_playing: bool,
	travel: i8,
}

impl PlaybackState {
	/// Selected direction index.
	pub fn direction(&self) -> usize {
		self.direction
	}

	/// Frame index within the selected direction.
	pub fn frame(&self) -> usize {
		self.frame
	}

	/// Display scale, within `MIN_SCALE..=MAX_SCALE`.
	pub fn scale(&self) -> u32 {
		self.scale
	}

	/// Whether playback wraps around.
	pub fn repeat(&self) -> bool {
		self.repeat
	}

	/// Current play mode.
	pub fn play_mode(&self) -> PlayMode {
		self.play_mode
	}

	/// Tick interval in milliseconds (always > 0).
	pub fn tick_interval_ms(&self) -> u32 {
		self.tick_interval_ms
	}

	/// Whether frames are advancing.
	pub fn is_playing(&self) -> bool {
		self.is_playing
	}

	/// Direction of travel in ping-pong mode, `1` or `-1`.
	pub fn travel(&self) -> i8 {
		self.travel
	}

	/// Playing or stopped.
	pub fn status(&self) -> Status {
		if self.is_playing { Status::Playing } else { Status::Stopped }
	}
}

/// Playback state machine for one animation set.
///
/// Keeps the frame index valid for the selected direction at all times and
/// advances it on ticks according to the play mode and repeat flag.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dirsprite_player::playback::{PlayMode, Player, PlayerOptions};
///
/// let mut player = Player::new(vec![3], &PlayerOptions::default());
/// player.set_play_mode(PlayMode::PingPong);
/// player.play();
///
/// let mut seen = vec![player.state().frame()];
/// for _ in 0..5 {
///     player.update(Duration::from_millis(100));
///     seen.push(player.state().frame());
/// }
/// assert_eq!(seen, vec![0, 1, 2, 1, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Player {
	state: PlaybackState,
	frame_counts: Vec<usize>,
	ticker: Ticker,
	bounced: bool,
}

impl Player {
	/// Creates a player for directions with the given frame counts.
	///
	/// An empty layout is treated as one single-frame direction and zero
	/// counts as one, so indices stay valid even for degenerate input.
	pub fn new(frame_counts: Vec<usize>, options: &PlayerOptions) -> Self {
		let mut frame_counts: Vec<usize> = frame_counts.into_iter().map(|n| n.max(1)).collect();
		if frame_counts.is_empty() {
			warn!("Player created without directions, assuming a single frame");
			frame_counts.push(1);
		}

		let tick_interval_ms = options.tick_ms.max(1);
		Self {
			state: PlaybackState {
				direction: 0,
				frame: 0,
				scale: options.scale.clamp(MIN_SCALE, MAX_SCALE),
				repeat: options.repeat,
				play_mode: options.play_mode,
				tick_interval_ms,
				is_playing: options.autoplay,
				travel: 1,
			},
			frame_counts,
			ticker: Ticker::new(Duration::from_millis(u64::from(tick_interval_ms))),
			bounced: false,
		}
	}

	/// Creates a player matching the layout of `set`.
	pub fn for_set(set: &AnimationSet, options: &PlayerOptions) -> Self {
		Self::new(set.frame_counts(), options)
	}

	/// Returns the current playback values.
	pub fn state(&self) -> &PlaybackState {
		&self.state
	}

	/// Returns the ticker.
	pub fn ticker(&self) -> &Ticker {
		&self.ticker
	}

	/// Number of directions.
	pub fn direction_count(&self) -> usize {
		self.frame_counts.len()
	}

	/// Number of frames in the selected direction.
	pub fn frame_count(&self) -> usize {
		self.frame_counts[self.state.direction]
	}

	/// Starts playback.
	///
	/// A forward, non-repeating animation parked on its last frame starts
	/// over from frame 0. The next tick fires one full interval from now.
	pub fn play(&mut self) {
		if self.state.is_playing {
			return;
		}

		let last = self.frame_count() - 1;
		if self.state.play_mode == PlayMode::Forward && !self.state.repeat && self.state.frame == last
		{
			self.state.frame = 0;
		}

		self.state.is_playing = true;
		self.ticker.rewind();
		debug!("Playback started at direction {} frame {}", self.state.direction, self.state.frame);
	}

	/// Stops playback, keeping the frame.
	pub fn pause(&mut self) {
		if self.state.is_playing {
			self.state.is_playing = false;
			debug!("Playback paused at frame {}", self.state.frame);
		}
	}

	/// Starts or stops playback.
	pub fn set_playing(&mut self, playing: bool) {
		if playing { self.play() } else { self.pause() }
	}

	/// Flips between playing and stopped.
	pub fn toggle_playing(&mut self) {
		self.set_playing(!self.state.is_playing);
	}

	/// Selects a direction.
	///
	/// Out-of-range indices are clamped to the last direction. The frame is
	/// kept when it exists in the new direction and reset to 0 otherwise.
	/// Playing status is unchanged.
	pub fn set_direction(&mut self, direction: usize) {
		let last = self.frame_counts.len() - 1;
		if direction > last {
			warn!("Direction {direction} out of range, clamping to {last}");
		}

		let direction = direction.min(last);
		if direction == self.state.direction {
			return;
		}

		self.state.direction = direction;
		if self.state.frame >= self.frame_count() {
			self.state.frame = 0;
			self.state.travel = 1;
			self.bounced = false;
		}
	}

	/// Jumps to a frame of the selected direction, clamped into range.
	pub fn set_frame(&mut self, frame: usize) {
		let last = self.frame_count() - 1;
		if frame > last {
			warn!("Frame {frame} out of range, clamping to {last}");
		}
		self.state.frame = frame.min(last);
	}

	/// Sets the display scale, clamped to `MIN_SCALE..=MAX_SCALE`.
	///
	/// Returns `true` when the scale changed.
	pub fn set_scale(&mut self, scale: u32) -> bool {
		let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
		let changed = scale != self.state.scale;
		self.state.scale = scale;
		changed
	}

	/// Sets the repeat flag.
	pub fn set_repeat(&mut self, repeat: bool) {
		self.state.repeat = repeat;
	}

	/// Sets the play mode and restarts ping-pong travel forwards.
	pub fn set_play_mode(&mut self, mode: PlayMode) {
		self.state.play_mode = mode;
		self.state.travel = 1;
		self.bounced = false;
	}

	/// Sets the tick interval and resets the ticker.
	///
	/// A zero interval is raised to 1 ms. The next tick fires one full new
	/// interval after this call.
	pub fn set_tick_interval(&mut self, ms: u32) {
		let ms = ms.max(1);
		self.state.tick_interval_ms = ms;
		self.ticker.reset(Duration::from_millis(u64::from(ms)));
	}

	/// Feeds elapsed time to the ticker and applies a due tick.
	///
	/// Returns `true` when a tick was applied.
	pub fn update(&mut self, elapsed: Duration) -> bool {
		if !self.state.is_playing {
			return false;
		}
		self.ticker.advance(elapsed) && self.tick()
	}

	/// Applies one tick immediately.
	///
	/// Does nothing and returns `false` while stopped.
	pub fn tick(&mut self) -> bool {
		if !self.state.is_playing {
			return false;
		}

		match self.state.play_mode {
			PlayMode::Forward => self.step_forward(),
			PlayMode::PingPong => self.step_ping_pong(),
		}
		true
	}

	fn step_forward(&mut self) {
		let count = self.frame_count();
		let next = self.state.frame + 1;

		if next >= count {
			if self.state.repeat {
				self.state.frame = 0;
			} else {
				self.state.frame = count - 1;
				self.stop_at_end();
			}
			return;
		}

		self.state.frame = next;
		if !self.state.repeat && next == count - 1 {
			self.stop_at_end();
		}
	}

	fn step_ping_pong(&mut self) {
		let count = self.frame_count();
		if count == 1 {
			self.state.frame = 0;
			if !self.state.repeat {
				self.stop_at_end();
			}
			return;
		}

		let last = count - 1;
		// The frame may have been moved by the user since the last tick.
		if self.state.frame >= last {
			self.state.frame = last;
			self.state.travel = -1;
		} else if self.state.frame == 0 {
			self.state.travel = 1;
		}

		self.state.frame = if self.state.travel > 0 {
			self.state.frame + 1
		} else {
			self.state.frame - 1
		};

		if self.state.frame == last {
			self.state.travel = -1;
			self.bounced = true;
		} else if self.state.frame == 0 {
			self.state.travel = 1;
			if self.bounced {
				self.bounced = false;
				if !self.state.repeat {
					self.stop_at_end();
				}
			}
		}
	}

	fn stop_at_end(&mut self) {
		self.state.is_playing = false;
		debug!(
			"Playback finished at direction {} frame {}",
			self.state.direction, self.state.frame
		);
	}

	/// Applies persisted settings, clamping every field.
	///
	/// Playback is left stopped.
	pub fn restore(&mut self, view: &ViewState) {
		self.pause();
		self.set_scale(view.scale);
		self.set_repeat(view.repeat);
		self.set_play_mode(view.play_mode);
		self.set_tick_interval(view.tick_ms);
		self.set_direction(view.direction as usize);
		self.set_frame(view.frame as usize);
	}

	/// Captures the persistable settings.
	pub fn view_state(&self) -> ViewState {
		ViewState {
			direction: self.state.direction as u32,
			frame: self.state.frame as u32,
			scale: self.state.scale,
			repeat: self.state.repeat,
			play_mode: self.state.play_mode,
			tick_ms: self.state.tick_interval_ms,
		}
	}
}
