#![allow(dead_code)]

use strip_director::{Color, OutputDriver, StatusIndicators};

/// Keeps every frame it is handed
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Color>>,
    pub bits: Vec<u8>,
}

impl RecordingDriver {
    pub fn last(&self) -> &[Color] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Color], bits: u8) {
        self.frames.push(colors.to_vec());
        self.bits.push(bits);
    }
}

/// Counts heartbeats and keeps every expiry light change
#[derive(Debug, Default)]
pub struct RecordingIndicators {
    pub heartbeats: usize,
    pub expiry: Vec<bool>,
}

impl StatusIndicators for RecordingIndicators {
    fn heartbeat(&mut self) {
        self.heartbeats += 1;
    }

    fn set_expiry(&mut self, lit: bool) {
        self.expiry.push(lit);
    }
}
