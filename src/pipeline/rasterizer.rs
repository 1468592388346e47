use crate::core::Viewport;
use crate::debug_print;
use crate::pipeline::{Fragment, ProcessedGeometry, QualityHint};
use glam::{Vec2, Vec3};
use rayon::prelude::*;

pub struct Rasterizer {
    viewport: Viewport,
}

impl Rasterizer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Modifies the fragment buffer in place. Fragments come out grouped by
    /// triangle, in submission order.
    pub fn rasterize(
        &mut self,
        geometry: &[ProcessedGeometry],
        quality: QualityHint,
        frags: &mut Vec<Fragment>,
    ) {
        frags.clear();
        debug_print!("Processing {} triangles", geometry.len());

        *frags = geometry
            .par_iter()
            .flat_map_iter(|geo| self.rasterize_triangle_barycentric(geo, quality))
            .collect();

        debug_print!("Generated {} fragments", frags.len());
    }

    fn rasterize_triangle_barycentric(
        &self,
        geo: &ProcessedGeometry,
        quality: QualityHint,
    ) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return fragments;
        }

        let [v0, v1, v2] = geo.vertices;
        let (p0, p1, p2) = (v0.truncate(), v1.truncate(), v2.truncate());

        // Compute bounding box, clamped to the screen
        let max_x = (self.viewport.width - 1) as f32;
        let max_y = (self.viewport.height - 1) as f32;
        let bbox_min = p0.min(p1).min(p2).max(Vec2::ZERO);
        let bbox_max = p0.max(p1).max(p2).min(Vec2::new(max_x, max_y));
        if bbox_min.x > bbox_max.x || bbox_min.y > bbox_max.y {
            return fragments;
        }

        let sample_offset = match quality {
            QualityHint::Nicest => 0.5,
            QualityHint::Fastest => 0.0,
        };

        for y in bbox_min.y as usize..=bbox_max.y as usize {
            for x in bbox_min.x as usize..=bbox_max.x as usize {
                let p = Vec2::new(x as f32 + sample_offset, y as f32 + sample_offset);
                if let Some(w) = barycentric(p, p0, p1, p2) {
                    if w.x >= 0.0 && w.y >= 0.0 && w.z >= 0.0 {
                        let depth = v0.z * w.x + v1.z * w.y + v2.z * w.z;
                        fragments.push(Fragment {
                            screen_pos: (x, y),
                            depth,
                            color: geo.color,
                        });
                    }
                }
            }
        }

        fragments
    }
}

/// Barycentric weights of `p` in the triangle (v0, v1, v2). Works for either
/// winding; `None` for degenerate (edge-on) triangles.
fn barycentric(p: Vec2, v0: Vec2, v1: Vec2, v2: Vec2) -> Option<Vec3> {
    let denom = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
    if denom.abs() < 1e-10 {
        return None;
    }
    let w0 = ((v1.y - v2.y) * (p.x - v2.x) + (v2.x - v1.x) * (p.y - v2.y)) / denom;
    let w1 = ((v2.y - v0.y) * (p.x - v2.x) + (v0.x - v2.x) * (p.y - v2.y)) / denom;
    let w2 = 1.0 - w0 - w1;
    Some(Vec3::new(w0, w1, w2))
}
