//! Decoded directional sprite animations.
//!
//! An [`AnimationSet`] is what a sprite decoder hands over once a resource
//! has been read: a list of [`Direction`]s, each holding an ordered list of
//! full-color [`Frame`]s and the [`BoundingBox`] that encloses them.
//!
//! # Building a set from indexed pixels
//!
//! ```
//! use dirsprite_types::anim::{AnimationSet, BoundingBox, Direction, Frame, Palette};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let palette = Palette::grayscale();
//!
//! let frames = (1..=4u8)
//!     .map(|shade| Frame::from_indexed(2, 2, &[shade; 4], &palette))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let direction = Direction::new(BoundingBox::sized(2, 2), frames)?;
//!
//! let set = AnimationSet::new(vec![direction])?;
//! assert_eq!(set.direction_count(), 1);
//! assert_eq!(set.frames_per_direction(), 4);
//! # Ok(())
//! # }
//! ```

pub mod direction;
pub mod frame;
pub mod palette;
pub mod set;

pub use direction::{BoundingBox, Direction};
pub use frame::Frame;
pub use palette::{Color, Palette};
pub use set::{AnimationSet, Header};
