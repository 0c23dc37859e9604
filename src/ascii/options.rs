//! Export configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_FRAME_RATE;
use crate::util::{Error, Result};

/// How keyframe timestamps are derived from frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyTiming {
    /// `frame_index / frame_rate` seconds.
    FrameIndex,
    /// The frame's own `time` field.
    FrameTime,
}

/// Options for one export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// `Creator` written in the header.
    pub creator: String,
    /// Attribution comments at the top of the document.
    pub comments: Vec<String>,
    /// Frames per second for [`KeyTiming::FrameIndex`].
    pub frame_rate: u32,
    pub key_timing: KeyTiming,
    /// Reverse polygon winding; importers read FBX faces with flipped winding.
    pub reverse_winding: bool,
    /// Name of the animation layer curve nodes attach to.
    pub anim_layer_name: String,
    /// Parent model label meshes are connected to.
    pub scene_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            creator: "fbx-ascii exporter".to_string(),
            comments: vec![format!("Written by fbx-ascii {}", env!("CARGO_PKG_VERSION"))],
            frame_rate: DEFAULT_FRAME_RATE,
            key_timing: KeyTiming::FrameIndex,
            reverse_winding: true,
            anim_layer_name: "BaseLayer".to_string(),
            scene_name: "Scene".to_string(),
        }
    }
}

impl ExportOptions {
    /// Load options from a JSON file; missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&text)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject settings that would produce broken key times.
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(Error::InvalidFrameRate(self.frame_rate));
        }
        Ok(())
    }
}
