use std::fmt::{self, Display, Formatter};

use super::color::{Color, Rgb8};

/// Side length of every cube, in normalized scene coordinates.
pub const CUBE_SIDE: f64 = 0.2;

pub const BLUE: Rgb8 = Rgb8::new(41, 98, 255);
pub const PURPLE: Rgb8 = Rgb8::new(170, 0, 250);
pub const GREEN: Rgb8 = Rgb8::new(22, 179, 100);

const LEVEL_OFFSETS: [f64; 6] = [-0.9, -0.6, -0.3, 0.0, 0.3, 0.6];
const LEVEL_COLORS: [Rgb8; 3] = [BLUE, PURPLE, GREEN];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    /// Horizontal position of the cube's left edge, roughly in [-1, 1]
    pub offset: f64,
    pub color: Rgb8,
}

impl Cube {
    pub fn new(offset: f64, color: Rgb8) -> Self {
        Self { offset, color }
    }

    pub fn draw_color(&self) -> Color {
        self.color.normalized()
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cube @ {:+.2} rgb({}, {}, {})",
            self.offset, self.color.r, self.color.g, self.color.b
        )
    }
}

/// The live cubes, in draw order. Only ever shrinks.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    cubes: Vec<Cube>,
}

impl Scene {
    pub fn new(cubes: Vec<Cube>) -> Self {
        Self { cubes }
    }

    /// The compiled-in level: six cubes cycling blue, purple, green.
    pub fn level() -> Self {
        let cubes = LEVEL_OFFSETS
            .iter()
            .zip(LEVEL_COLORS.iter().cycle())
            .map(|(&offset, &color)| Cube::new(offset, color))
            .collect();
        Self { cubes }
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Removes the cube at `index`, shifting every later cube down by one.
    pub fn remove(&mut self, index: usize) -> Option<Cube> {
        if index < self.cubes.len() {
            Some(self.cubes.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_layout() {
        let scene = Scene::level();
        assert_eq!(scene.len(), 6);

        let offsets: Vec<f64> = scene.cubes().iter().map(|c| c.offset).collect();
        assert_eq!(offsets, vec![-0.9, -0.6, -0.3, 0.0, 0.3, 0.6]);

        let colors: Vec<Rgb8> = scene.cubes().iter().map(|c| c.color).collect();
        assert_eq!(colors, vec![BLUE, PURPLE, GREEN, BLUE, PURPLE, GREEN]);
    }

    #[test]
    fn remove_keeps_offset_and_color_together() {
        let mut scene = Scene::level();
        let removed = scene.remove(1).unwrap();
        assert_eq!(removed, Cube::new(-0.6, PURPLE));

        assert_eq!(scene.len(), 5);
        assert_eq!(scene.cubes()[1], Cube::new(-0.3, GREEN));
        assert_eq!(scene.cubes()[4], Cube::new(0.6, GREEN));
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut scene = Scene::level();
        assert_eq!(scene.remove(6), None);
        assert_eq!(scene.len(), 6);

        let mut empty = Scene::default();
        assert!(empty.is_empty());
        assert_eq!(empty.remove(0), None);
    }
}
