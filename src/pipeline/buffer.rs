use crate::core::{Color, Pixel, Viewport};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, SetForegroundColor},
};
use minifb::Window;
use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;
use std::io::{self, stdout, Write};

use super::DepthFunc;

pub trait Buffer {
    type Pixel: Clone + Send + Sync;

    fn new(viewport: Viewport) -> Self
    where
        Self: Sized;
    fn viewport(&self) -> Viewport;
    /// Fill every pixel with `color` and every depth slot with `depth`.
    fn clear(&mut self, color: Color, depth: f32);
    fn create_pixel(color: Color) -> Self::Pixel;
    /// Writes `pixel` if it passes the depth test. Returns whether it was written.
    fn set_pixel(
        &mut self,
        pos: (usize, usize),
        depth: f32,
        depth_func: DepthFunc,
        pixel: Self::Pixel,
    ) -> bool;
    fn present(&self) -> io::Result<()> {
        Ok(()) // Default does nothin
    }
    fn present_window(&self, _window: &mut Window) -> io::Result<()> {
        Ok(()) // Default implementation does nothing
    }
}

pub struct TermBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<Pixel>,
    pub depth: Vec<f32>,
}

impl Buffer for TermBuffer {
    type Pixel = Pixel;

    fn new(viewport: Viewport) -> Self {
        let size = viewport.pixel_count();
        TermBuffer {
            width: viewport.width,
            height: viewport.height,
            data: vec![Pixel::term_full(Color::WHITE); size],
            depth: vec![1.0; size],
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    fn clear(&mut self, color: Color, depth: f32) {
        let blank = Pixel::term_full(color);
        self.data.par_chunks_mut(1024).for_each(|chunk| {
            for point in chunk {
                *point = blank;
            }
        });
        self.depth.par_chunks_mut(1024).for_each(|chunk| {
            for d in chunk {
                *d = depth;
            }
        });
    }

    fn create_pixel(color: Color) -> Self::Pixel {
        Pixel::term_full(color)
    }

    fn set_pixel(
        &mut self,
        pos: (usize, usize),
        depth: f32,
        depth_func: DepthFunc,
        pixel: Self::Pixel,
    ) -> bool {
        if pos.0 >= self.width || pos.1 >= self.height {
            return false;
        }
        let index = pos.0 + pos.1 * self.width;
        if !depth_func.passes(depth, self.depth[index]) {
            return false;
        }
        self.data[index] = pixel;
        self.depth[index] = depth;
        true
    }

    fn present(&self) -> io::Result<()> {
        let mut stdout = stdout();
        let mut last_color = None;

        for y in 0..self.height {
            queue!(stdout, MoveTo(0, y as u16))?;

            let mut x = 0;
            while x < self.width {
                let pixel = self.data[x + y * self.width];
                let color = pixel.to_u32();

                // Accumulate characters with the same color
                let mut run = String::new();
                while x < self.width && self.data[x + y * self.width].to_u32() == color {
                    run.push(self.data[x + y * self.width].ch());
                    x += 1;
                }

                if last_color != Some(color) {
                    if let Pixel::Terminal { color: c, .. } = pixel {
                        queue!(stdout, SetForegroundColor(c.to_crossterm_color()))?;
                    }
                    last_color = Some(color);
                }
                queue!(stdout, Print(run))?;
            }
        }

        stdout.flush()
    }
}

pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
    pub depth: Vec<f32>,
}

impl Buffer for FrameBuffer {
    type Pixel = Pixel;

    fn new(viewport: Viewport) -> Self {
        let buf_size = viewport.pixel_count();
        FrameBuffer {
            width: viewport.width,
            height: viewport.height,
            data: vec![Color::WHITE.to_u32(); buf_size],
            depth: vec![1.0; buf_size],
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    fn clear(&mut self, color: Color, depth: f32) {
        let packed = color.to_u32();
        self.data.par_chunks_mut(1024).for_each(|chunk| {
            for point in chunk {
                *point = packed;
            }
        });
        self.depth.par_chunks_mut(1024).for_each(|chunk| {
            for d in chunk {
                *d = depth;
            }
        });
    }

    fn set_pixel(
        &mut self,
        pos: (usize, usize),
        depth: f32,
        depth_func: DepthFunc,
        pixel: Self::Pixel,
    ) -> bool {
        if pos.0 >= self.width || pos.1 >= self.height {
            return false;
        }
        let index = pos.0 + pos.1 * self.width;
        if !depth_func.passes(depth, self.depth[index]) {
            return false;
        }
        self.data[index] = pixel.to_u32();
        self.depth[index] = depth;
        true
    }

    fn create_pixel(color: Color) -> Self::Pixel {
        Pixel::new_framebuffer(color)
    }

    fn present_window(&self, window: &mut Window) -> io::Result<()> {
        window
            .update_with_buffer(&self.data, self.width, self.height)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        Ok(())
    }
}
