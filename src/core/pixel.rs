use crate::core::color::Color;

/// Full block used for every lit terminal cell.
pub const TERM_BLOCK: char = '█';

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pixel {
    Terminal { ch: char, color: Color },
    Framebuffer(u32),
}

impl Pixel {
    pub fn new_terminal(ch: char, color: Color) -> Self {
        Pixel::Terminal { ch, color }
    }

    pub fn term_full(color: Color) -> Self {
        Pixel::new_terminal(TERM_BLOCK, color)
    }

    pub fn new_framebuffer(color: Color) -> Self {
        Pixel::Framebuffer(color.to_u32())
    }

    pub fn ch(&self) -> char {
        match self {
            Pixel::Terminal { ch, .. } => *ch,
            Pixel::Framebuffer(_) => TERM_BLOCK,
        }
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Pixel::Terminal { color, .. } => color.to_u32(),
            Pixel::Framebuffer(packed) => *packed,
        }
    }
}
