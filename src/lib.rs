#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `dirsprite` previews directional sprite animations and exports them as
//! looping GIFs.
//!
//! Decoded resources become an [`AnimationSet`]; an [`AnimationPanel`] owns
//! one set together with its playback state machine and uploaded textures.
//!
pub use dirsprite_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use dirsprite_dylib;
