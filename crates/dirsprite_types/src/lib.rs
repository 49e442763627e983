//! This crate provides the data model for the `dirsprite` project.
//!
//! Decoded sprite resources are represented as an [`anim::AnimationSet`]:
//! one or more directions, each an ordered sequence of frames plus a
//! bounding box. Decoding the binary container format is left to the caller;
//! this crate only checks the invariants the player relies on.
//!
//! # Examples
//!
//! ```
//! use dirsprite_types::prelude::*;
//! use image::RgbaImage;
//!
//! # fn main() -> Result<(), AnimError> {
//! let frames = vec![Frame::from_image(RgbaImage::new(8, 8)); 3];
//! let set = AnimationSet::new(vec![Direction::from_frames(frames)?])?;
//! assert_eq!(set.total_frames(), 3);
//! # Ok(())
//! # }
//! ```

pub mod anim;
mod error;

/// `use dirsprite_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::AnimError;
