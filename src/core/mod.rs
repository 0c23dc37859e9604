//! Core animation types.
//!
//! - [`KTime`] encoding of keyframe timestamps
//! - [`AnimFrame`] / [`AnimObject`] per-frame transform samples

mod time;
mod anim;

pub use time::*;
pub use anim::*;
