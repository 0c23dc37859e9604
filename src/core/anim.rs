//! Recorded transform animation.

use serde::{Deserialize, Serialize};

use crate::util::{euler_degrees, Error, Quat, Result, Vec3};

/// Transform of one object at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimFrame {
    pub position: Vec3,
    pub rotation: Quat,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    /// Sample time in seconds.
    #[serde(default)]
    pub time: f32,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl AnimFrame {
    /// Rotation as Euler angles in degrees, derived from the stored quaternion.
    #[inline]
    pub fn rotation_euler(&self) -> Vec3 {
        euler_degrees(self.rotation)
    }
}

/// Ordered frame samples for one animated object.
///
/// Frames are expected in increasing time order; this is not validated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimObject {
    pub frames: Vec<AnimFrame>,
}

impl AnimObject {
    /// Create an animation with no frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame with unit scale.
    pub fn add_frame(&mut self, position: Vec3, rotation: Quat, time: f32) {
        self.add_frame_scaled(position, rotation, Vec3::ONE, time);
    }

    /// Append a frame.
    pub fn add_frame_scaled(&mut self, position: Vec3, rotation: Quat, scale: Vec3, time: f32) {
        self.frames.push(AnimFrame { position, rotation, scale, time });
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Check that every frame samples to finite curve values.
    ///
    /// A rotation must normalize; a zero quaternion would turn into NaN
    /// angles.
    pub fn validate(&self) -> Result<()> {
        for (frame, f) in self.frames.iter().enumerate() {
            if !(f.position.is_finite() && f.scale.is_finite() && f.time.is_finite()) {
                return Err(Error::NonFiniteFrame { frame });
            }
            if !f.rotation.is_finite() || !f.rotation.length_recip().is_finite() {
                return Err(Error::InvalidRotation { frame });
            }
        }
        Ok(())
    }

    /// Split one vector channel into per-axis curves.
    pub fn curve_data(&self, channel: impl Fn(&AnimFrame) -> Vec3) -> [Vec<f32>; 3] {
        let mut x = Vec::with_capacity(self.frames.len());
        let mut y = Vec::with_capacity(self.frames.len());
        let mut z = Vec::with_capacity(self.frames.len());
        for frame in &self.frames {
            let v = channel(frame);
            x.push(v.x);
            y.push(v.y);
            z.push(v.z);
        }
        [x, y, z]
    }

    pub fn position_curves(&self) -> [Vec<f32>; 3] {
        self.curve_data(|f| f.position)
    }

    /// Euler rotation curves, recomputed from the quaternions on every call.
    pub fn rotation_curves(&self) -> [Vec<f32>; 3] {
        self.curve_data(AnimFrame::rotation_euler)
    }

    pub fn scale_curves(&self) -> [Vec<f32>; 3] {
        self.curve_data(|f| f.scale)
    }
}
