//! The options record filled from resolved configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the emulator treats detected idle loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdleOptimization {
    Ignore,
    Remove,
    #[default]
    Detect,
}

impl IdleOptimization {
    pub const ALL: [IdleOptimization; 3] = [Self::Ignore, Self::Remove, Self::Detect];

    /// Canonical lowercase token used in config files.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Remove => "remove",
            Self::Detect => "detect",
        }
    }
}

impl fmt::Display for IdleOptimization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Error for a token that names no [`IdleOptimization`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized idle optimization: {0:?}")]
pub struct UnknownToken(pub String);

impl FromStr for IdleOptimization {
    type Err = UnknownToken;

    /// Tokens are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| s.eq_ignore_ascii_case(v.as_token()))
            .ok_or_else(|| UnknownToken(s.to_string()))
    }
}

/// Runtime options consumed by the host application.
///
/// Field names serialize to the same camelCase keys used in config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub bios: Option<String>,
    pub skip_bios: bool,
    pub use_bios: bool,
    pub log_level: i32,
    pub frameskip: i32,
    pub rewind_enable: bool,
    pub rewind_buffer_capacity: i32,
    pub rewind_buffer_interval: i32,
    pub fps_target: f32,
    pub audio_buffers: u32,
    pub audio_sync: bool,
    pub video_sync: bool,
    pub fullscreen: bool,
    pub width: i32,
    pub height: i32,
    pub volume: i32,
    pub mute: bool,
    pub lock_aspect_ratio: bool,
    pub resample_video: bool,
    pub suspend_screensaver: bool,
    pub idle_optimization: IdleOptimization,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bios: None,
            skip_bios: false,
            use_bios: true,
            // fatal | error | warn
            log_level: 0x07,
            frameskip: 0,
            rewind_enable: false,
            rewind_buffer_capacity: 0,
            rewind_buffer_interval: 0,
            fps_target: 60.0,
            audio_buffers: 512,
            audio_sync: true,
            video_sync: false,
            fullscreen: false,
            width: 240,
            height: 160,
            volume: 0x100,
            mute: false,
            lock_aspect_ratio: false,
            resample_video: false,
            suspend_screensaver: true,
            idle_optimization: IdleOptimization::Detect,
        }
    }
}
