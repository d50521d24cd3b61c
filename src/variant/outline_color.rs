use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB colour used when outlining a highlighted block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OutlineColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl OutlineColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a colour from host-supplied integer channels, clamping each to 0..=255
    pub fn from_ints(rgb: [i32; 3]) -> Self {
        let clamp = |c: i32| c.clamp(0, u8::MAX as i32) as u8;
        Self::new(clamp(rgb[0]), clamp(rgb[1]), clamp(rgb[2]))
    }

    /// Channels in 0.0..=1.0, the form renderers upload
    pub fn as_normalized(&self) -> [f32; 3] {
        [
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
        ]
    }
}

impl From<[u8; 3]> for OutlineColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for OutlineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
