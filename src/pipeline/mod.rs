use crate::{
    core::{Color, CubeMesh, Scene, Viewport},
    debug_print,
};
use glam::{Mat4, Vec3, Vec4};
use minifb::Window;
use rasterizer::Rasterizer;
use std::{cell::RefCell, io};

pub mod buffer;
pub mod rasterizer;

pub use buffer::{Buffer, FrameBuffer, TermBuffer};

/// Comparison used by the depth test; the incoming fragment is on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFunc {
    Less,
    LessEqual,
    Always,
}

impl DepthFunc {
    pub fn passes(&self, incoming: f32, stored: f32) -> bool {
        match self {
            DepthFunc::Less => incoming < stored,
            DepthFunc::LessEqual => incoming <= stored,
            DepthFunc::Always => true,
        }
    }
}

/// Sampling quality. `Nicest` samples pixel centers, `Fastest` pixel corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityHint {
    Fastest,
    Nicest,
}

/// Fixed-function state set up once by the init hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub clear_color: Color,
    pub clear_depth: f32,
    pub depth_test: bool,
    pub depth_func: DepthFunc,
    pub quality: QualityHint,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_color: Color::WHITE,
            clear_depth: 1.0,
            depth_test: true,
            depth_func: DepthFunc::LessEqual,
            quality: QualityHint::Nicest,
        }
    }
}

impl RenderSettings {
    fn effective_depth_func(&self) -> DepthFunc {
        if self.depth_test {
            self.depth_func
        } else {
            DepthFunc::Always
        }
    }
}

/// A screen-space triangle ready for rasterization
#[derive(Clone, Debug)]
pub struct ProcessedGeometry {
    /// Screen x/y in pixels, z as [0, 1] depth
    pub vertices: [Vec3; 3],
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct Fragment {
    pub screen_pos: (usize, usize),
    pub depth: f32,
    pub color: Color,
}

/// Software pipeline that turns the scene's cubes into pixels.
///
/// Every frame is rebuilt from scratch:
/// 1. Clear the back buffer to the clear color and depth
/// 2. Emit six quads per live cube and project them to screen space
/// 3. Rasterize the resulting triangles to fragments
/// 4. Depth test and write the fragments into the back buffer
/// 5. Swap and present
pub struct Pipeline<B: Buffer> {
    front_buffer: RefCell<B>,
    back_buffer: RefCell<B>,
    settings: RenderSettings,
    /// Model-view-projection, reset to identity every frame
    transform: RefCell<Mat4>,
    geometry: RefCell<Vec<ProcessedGeometry>>,
    rasterizer: RefCell<Rasterizer>,
    fragments: RefCell<Vec<Fragment>>,
}

impl<B: Buffer> Pipeline<B> {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            front_buffer: RefCell::new(B::new(viewport)),
            back_buffer: RefCell::new(B::new(viewport)),
            settings: RenderSettings::default(),
            transform: RefCell::new(Mat4::IDENTITY),
            geometry: RefCell::new(Vec::with_capacity(72)),
            rasterizer: RefCell::new(Rasterizer::new(viewport)),
            fragments: RefCell::new(Vec::new()),
        }
    }

    pub fn init(&mut self, settings: RenderSettings) {
        self.settings = settings;
        self.front_buffer
            .borrow_mut()
            .clear(settings.clear_color, settings.clear_depth);
    }

    pub fn viewport(&self) -> Viewport {
        self.front_buffer.borrow().viewport()
    }

    /// Reallocates the buffers when the surface changed size.
    pub fn resize(&mut self, viewport: Viewport) {
        let current = self.viewport();
        if viewport == current {
            return;
        }
        debug_print!(
            "Resizing pipeline {}x{} -> {}x{}",
            current.width,
            current.height,
            viewport.width,
            viewport.height
        );
        self.front_buffer = RefCell::new(B::new(viewport));
        self.back_buffer = RefCell::new(B::new(viewport));
        self.rasterizer = RefCell::new(Rasterizer::new(viewport));
    }

    pub fn front_buffer(&self) -> &RefCell<B> {
        &self.front_buffer
    }

    /// Draws one frame of `scene` and presents it. Without a window the buffer
    /// presents itself (the terminal writes to stdout, the framebuffer is a no-op).
    pub fn render_frame(&self, scene: &Scene, window: Option<&mut Window>) -> io::Result<()> {
        self.back_buffer
            .borrow_mut()
            .clear(self.settings.clear_color, self.settings.clear_depth);
        *self.transform.borrow_mut() = Mat4::IDENTITY;

        self.process_geometry(scene);
        self.rasterize();
        self.process_fragments(&self.fragments.borrow());
        self.swap_buffers();

        match window {
            Some(window) => self.front_buffer.borrow().present_window(window),
            None => self.front_buffer.borrow().present(),
        }
    }

    pub fn process_geometry(&self, scene: &Scene) {
        let mvp = *self.transform.borrow();
        let viewport = self.viewport();
        let mut geometry = self.geometry.borrow_mut();
        geometry.clear();

        for cube in scene.cubes() {
            let mesh = CubeMesh::emit(cube);
            for quad in &mesh.quads {
                for tri in quad.triangles() {
                    geometry.push(ProcessedGeometry {
                        vertices: tri.map(|v| project(mvp, viewport, v)),
                        color: mesh.color,
                    });
                }
            }
        }
        debug_print!(
            "Emitted {} triangles for {} cubes",
            geometry.len(),
            scene.len()
        );
    }

    pub fn rasterize(&self) {
        self.rasterizer.borrow_mut().rasterize(
            &self.geometry.borrow(),
            self.settings.quality,
            &mut self.fragments.borrow_mut(),
        );
    }

    pub fn process_fragments(&self, fragments: &[Fragment]) {
        let depth_func = self.settings.effective_depth_func();
        let mut buffer = self.back_buffer.borrow_mut();
        for fragment in fragments {
            let pixel = B::create_pixel(fragment.color);
            buffer.set_pixel(fragment.screen_pos, fragment.depth, depth_func, pixel);
        }
    }

    pub fn swap_buffers(&self) {
        std::mem::swap(
            &mut *self.front_buffer.borrow_mut(),
            &mut *self.back_buffer.borrow_mut(),
        );
    }
}

fn project(mvp: Mat4, viewport: Viewport, v: Vec3) -> Vec3 {
    let clip = mvp * Vec4::from((v, 1.0));
    let ndc = clip.truncate() / clip.w;
    viewport.ndc_to_screen(ndc)
}
