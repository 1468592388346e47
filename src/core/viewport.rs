use glam::{Vec2, Vec3};

/// Pixel dimensions of the drawing surface. Screen space has its origin in the
/// top-left corner with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Maps normalized device coordinates onto the screen.
    /// x and y come back in pixels, z becomes a [0, 1] depth value.
    pub fn ndc_to_screen(&self, ndc: Vec3) -> Vec3 {
        let size = self.size();
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * size.x,
            (1.0 - ndc.y) * 0.5 * size.y,
            (ndc.z + 1.0) * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_land_on_screen_corners() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.ndc_to_screen(Vec3::new(-1.0, 1.0, -1.0)), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(vp.ndc_to_screen(Vec3::new(1.0, -1.0, 1.0)), Vec3::new(800.0, 600.0, 1.0));
        assert_eq!(vp.ndc_to_screen(Vec3::ZERO), Vec3::new(400.0, 300.0, 0.5));
    }
}
