//! Playback and export for directional sprite animations.
//!
//! - [`playback`]: the frame-advancing state machine and its ticker
//! - [`texture`]: lazily uploaded, scale-aware frame textures
//! - [`export`]: looping GIF export of one direction
//! - [`view_state`]: the settings blob a host persists between sessions
//! - [`panel`]: the preview panel tying the pieces together
//!
//! Everything here runs on the caller's thread; nothing is shared between
//! threads and no locking is involved.

pub mod export;
pub mod panel;
pub mod playback;
pub mod texture;
pub mod view_state;

/// `use dirsprite_player::prelude::*;` to import commonly used items.
pub mod prelude;
