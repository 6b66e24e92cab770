use serde::{Deserialize, Serialize};

/// Integer pixel coordinate on the output canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl PixelPoint {
    /// Construct a point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Clamp into `[0, width) x [0, height)`. Degenerate (zero) extents clamp to 0.
    pub fn clamp_into(self, width: u32, height: u32) -> Self {
        Self {
            x: self.x.min(width.saturating_sub(1)),
            y: self.y.min(height.saturating_sub(1)),
        }
    }
}

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Add `delta` to every channel, saturating at 0 and 255.
    pub fn shift(self, delta: i16) -> Self {
        fn ch(v: u8, delta: i16) -> u8 {
            (i16::from(v) + delta).clamp(0, 255) as u8
        }
        Self::new(ch(self.r, delta), ch(self.g, delta), ch(self.b, delta))
    }

    /// Opaque RGBA pixel.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }

    /// `#rrggbb` form, used when emitting SVG paint.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Human-readable byte size: one decimal, 1024 steps, `B` through `TB`.
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
