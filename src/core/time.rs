//! FBX time encoding.
//!
//! Keyframe timestamps are written as `KTime`, a fixed-point count of
//! [`KTIME_SECOND`] ticks per second.

/// FBX fixed-point time value.
pub type KTime = i64;

/// KTime ticks in one second.
pub const KTIME_SECOND: i64 = 46_186_158_000;

/// Frame rate assumed when keys are driven by frame index.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// KTime of a frame index at a fixed frame rate, rounded to the nearest tick.
///
/// `frame_rate` must be positive; [`ExportOptions::validate`] rejects zero
/// before any key is built, and zero is clamped to one here.
///
/// [`ExportOptions::validate`]: crate::ascii::ExportOptions::validate
pub fn ktime_from_frame(frame_index: usize, frame_rate: u32) -> KTime {
    let rate = frame_rate.max(1) as i128;
    let ticks = frame_index as i128 * KTIME_SECOND as i128;
    ((2 * ticks + rate) / (2 * rate)) as KTime
}

/// KTime of a time value in seconds, rounded to the nearest tick.
pub fn ktime_from_seconds(seconds: f32) -> KTime {
    (seconds as f64 * KTIME_SECOND as f64).round() as KTime
}
