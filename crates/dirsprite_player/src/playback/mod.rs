//! Playback state machine.
//!
//! A [`Player`] holds the [`PlaybackState`] of one preview: selected
//! direction and frame, scale, repeat flag, [`PlayMode`] and tick interval.
//! Time reaches it from the render loop through [`Player::update`], which a
//! [`Ticker`] turns into discrete ticks.

pub mod mode;
pub mod options;
pub mod state;
pub mod ticker;

pub use mode::PlayMode;
pub use options::PlayerOptions;
pub use state::{MAX_SCALE, MIN_SCALE, PlaybackState, Player, Status};
pub use ticker::Ticker;
