//! Dynamic-linking shim for `dirsprite`; enable the `dynamic_linking` feature instead of depending on this crate.

pub use dirsprite_internal::*;
