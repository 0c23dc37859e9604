//! Math type re-exports and rotation helpers.
//!
//! Vectors, quaternions and matrices come from `glam`. The host engine that
//! produces animation samples reports rotations as Euler angles in degrees,
//! applied Z first, then X, then Y, each wrapped to `[0, 360)`.

pub use glam::{EulerRot, Mat4, Quat, Vec3};

/// Euler angles (degrees) of a rotation, in the host engine's convention.
///
/// The conversion is lossy: different quaternions can map to the same angles
/// and the result depends on the axis order.
pub fn euler_degrees(q: Quat) -> Vec3 {
    // q = Ry * Rx * Rz, which is glam's intrinsic YXZ order.
    let (y, x, z) = q.normalize().to_euler(EulerRot::YXZ);
    Vec3::new(wrap_degrees(x), wrap_degrees(y), wrap_degrees(z))
}

/// Map radians to degrees in `[0, 360)`.
fn wrap_degrees(radians: f32) -> f32 {
    let d = radians.to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negatives
    if d >= 360.0 {
        0.0
    } else {
        d + 0.0
    }
}
