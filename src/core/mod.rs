pub mod color;
pub mod mesh;
pub mod pixel;
pub mod scene;
pub mod viewport;

pub use color::{Color, Rgb8};
pub use mesh::{CubeMesh, Face, Quad};
pub use pixel::Pixel;
pub use scene::{Cube, Scene, CUBE_SIDE};
pub use viewport::Viewport;
