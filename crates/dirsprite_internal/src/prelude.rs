//! Prelude module for `dirsprite_internal`.
//!
//! # Examples
//!
//! ```rust
//! use dirsprite_internal::prelude::*;
//!
//! let palette = Palette::grayscale();
//! let frame = Frame::from_indexed(1, 1, &[7], &palette).unwrap();
//! let set = AnimationSet::new(vec![Direction::from_frames(vec![frame]).unwrap()]).unwrap();
//!
//! let player = Player::for_set(&set, &PlayerOptions::default());
//! assert_eq!(player.state().play_mode(), PlayMode::Forward);
//! ```

#[doc(inline)]
pub use dirsprite_player::prelude::*;

#[doc(inline)]
pub use dirsprite_types::prelude::*;

#[doc(inline)]
pub use dirsprite_player;

#[doc(inline)]
pub use dirsprite_types;
