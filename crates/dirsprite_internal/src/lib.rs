//! This module is separated into its own crate to enable simple dynamic linking for `dirsprite`, and should not be used directly.

/// `use dirsprite::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export member crates for convenience
pub use dirsprite_player;
pub use dirsprite_types;

// Re-export commonly used types at crate root
pub use dirsprite_player::panel::AnimationPanel;
pub use dirsprite_player::playback::{PlayMode, Player};
pub use dirsprite_types::anim::{AnimationSet, Direction, Frame, Palette};
