use std::fmt::{self, Display, Formatter};

use glam::Vec3;

use super::scene::{Cube, CUBE_SIDE};
use super::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Bottom,
    Top,
}

impl Face {
    /// Emission order of a cube's faces.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Bottom,
        Face::Top,
    ];
}

impl Display for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Left => "Left",
            Face::Right => "Right",
            Face::Bottom => "Bottom",
            Face::Top => "Top",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub face: Face,
    pub vertices: [Vec3; 4],
}

impl Quad {
    /// Fan split (0, 1, 2) + (0, 2, 3).
    pub fn triangles(&self) -> [[Vec3; 3]; 2] {
        let [v0, v1, v2, v3] = self.vertices;
        [[v0, v1, v2], [v0, v2, v3]]
    }
}

/// One cube worth of geometry: six quads sharing a single flat color.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeMesh {
    pub quads: [Quad; 6],
    pub color: Color,
}

impl CubeMesh {
    /// Builds the hexahedron for `cube`. It starts at (offset, 0, 0) and extends
    /// +side along x and y and -side along z.
    pub fn emit(cube: &Cube) -> Self {
        Self {
            quads: cube_quads(cube.offset as f32, CUBE_SIDE as f32),
            color: cube.draw_color(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.quads.len() * 4
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.quads.iter().flat_map(|q| q.vertices)
    }
}

pub fn cube_quads(x: f32, len: f32) -> [Quad; 6] {
    let v = Vec3::new;
    let quad = |face, vertices| Quad { face, vertices };
    [
        quad(
            Face::Front,
            [v(x, 0.0, 0.0), v(x + len, 0.0, 0.0), v(x + len, len, 0.0), v(x, len, 0.0)],
        ),
        quad(
            Face::Back,
            [v(x, 0.0, -len), v(x + len, 0.0, -len), v(x + len, len, -len), v(x, len, -len)],
        ),
        quad(
            Face::Left,
            [v(x, 0.0, -len), v(x, 0.0, 0.0), v(x, len, 0.0), v(x, len, -len)],
        ),
        quad(
            Face::Right,
            [v(x + len, 0.0, -len), v(x + len, 0.0, 0.0), v(x + len, len, 0.0), v(x + len, len, -len)],
        ),
        quad(
            Face::Bottom,
            [v(x, 0.0, 0.0), v(x + len, 0.0, 0.0), v(x + len, 0.0, -len), v(x, 0.0, -len)],
        ),
        quad(
            Face::Top,
            [v(x, len, 0.0), v(x + len, len, 0.0), v(x + len, len, -len), v(x, len, -len)],
        ),
    ]
}
