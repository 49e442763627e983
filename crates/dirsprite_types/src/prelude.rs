//! Prelude module for `dirsprite_types`.
//!
//! ```
//! use dirsprite_types::prelude::*;
//!
//! let palette = Palette::grayscale();
//! assert_eq!(palette.get(16), Color::gray(16));
//! ```

#[doc(inline)]
pub use crate::anim::{AnimationSet, BoundingBox, Color, Direction, Frame, Header, Palette};

#[doc(inline)]
pub use crate::error::AnimError;
