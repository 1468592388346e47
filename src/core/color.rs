/// Normalized RGB color, every channel in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32, // Red component (0.0 - 1.0)
    pub g: f32, // Green component (0.0 - 1.0)
    pub b: f32, // Blue component (0.0 - 1.0)
}

/// A color as it is stored on a cube: three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Bring the channels into [0, 1] bounds for drawing.
    pub fn normalized(&self) -> Color {
        Color::from_rgb8(*self)
    }
}

impl Color {
    /// Create a new color with RGB components normalized.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8(rgb: Rgb8) -> Self {
        Self::new(
            rgb.r as f32 / 255.0,
            rgb.g as f32 / 255.0,
            rgb.b as f32 / 255.0,
        )
    }

    pub fn to_rgb8(&self) -> Rgb8 {
        Rgb8 {
            r: (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    pub fn to_crossterm_color(&self) -> crossterm::style::Color {
        let Rgb8 { r, g, b } = self.to_rgb8();
        crossterm::style::Color::Rgb { r, g, b }
    }

    /// 0x00RRGGBB, the layout minifb expects.
    pub fn to_u32(&self) -> u32 {
        let Rgb8 { r, g, b } = self.to_rgb8();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }
}

// Predefined colors
impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE // Default to white color
    }
}
