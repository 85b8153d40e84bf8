//! Linear RGB colors used as gradient stops and shading results

/// RGB color with floating point components (0.0-1.0 for valid stops)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// A single stop in a gradient's color sequence
pub type ColorStop = Rgb;

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    pub const fn black() -> Self {
        Rgb { r: 0.0, g: 0.0, b: 0.0 }
    }

    /// Build a color from a packed 0xRRGGBB value, e.g. `Rgb::from_hex(0x4d2695)`.
    pub fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear blend, `t` = 0.0 gives `self`, 1.0 gives `other`
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn scale(self, factor: f32) -> Rgb {
        Rgb {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    pub fn clamped(self) -> Rgb {
        Rgb {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Pack into 0x00RRGGBB (minifb buffer format)
    pub fn to_u32(self) -> u32 {
        let c = self.clamped();
        ((to_byte(c.r) as u32) << 16) | ((to_byte(c.g) as u32) << 8) | to_byte(c.b) as u32
    }
}

/// Convert a float value (0.0-1.0) to a byte (0-255)
#[inline]
pub fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
