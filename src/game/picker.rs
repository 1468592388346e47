//! Screen-space hit testing. Depth is ignored: every cube faces the viewer and
//! sits on the same plane, so its on-screen box comes straight from the layout.
//!
//! Positions are computed in f64 and the corner is truncated to a whole pixel.
//! Float noise below `SNAP_EPSILON` is absorbed first, so a corner that is
//! 39.99999999999999 on paper lands on pixel 40 rather than 39.

use glam::IVec2;

use crate::core::{Scene, Viewport, CUBE_SIDE};

use super::Click;

const SNAP_EPSILON: f64 = 1e-6;

fn to_pixel(v: f64) -> i32 {
    (v + SNAP_EPSILON).trunc() as i32
}

/// Screen coordinates of a cube's top-left corner, in whole pixels.
pub fn top_left(offset: f64, viewport: Viewport) -> IVec2 {
    let x = (1.0 + offset) * viewport.width as f64 / 2.0;
    let y = (1.0 - CUBE_SIDE) * viewport.height as f64 / 2.0;
    IVec2::new(to_pixel(x), to_pixel(y))
}

/// On-screen side length of a cube. Both axes use the viewport width.
pub fn screen_side(viewport: Viewport) -> f64 {
    CUBE_SIDE * viewport.width as f64 / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl HitBox {
    pub fn for_cube(offset: f64, viewport: Viewport) -> Self {
        let corner = top_left(offset, viewport);
        let side = screen_side(viewport);
        let (x_min, y_min) = (corner.x as f64, corner.y as f64);
        Self {
            x_min,
            x_max: x_min + side,
            y_min,
            y_max: y_min + side,
        }
    }

    /// Bounds are inclusive.
    pub fn contains(&self, click: Click) -> bool {
        let (x, y) = (click.x as f64, click.y as f64);
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

/// Index of the first live cube, in draw order, whose box contains `click`.
pub fn pick(scene: &Scene, click: Click, viewport: Viewport) -> Option<usize> {
    scene
        .cubes()
        .iter()
        .position(|cube| HitBox::for_cube(cube.offset, viewport).contains(click))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{scene::BLUE, Cube};

    const VP: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    const LEVEL: [f64; 6] = [-0.9, -0.6, -0.3, 0.0, 0.3, 0.6];

    #[test]
    fn top_left_on_800x600() {
        let corners: Vec<IVec2> = LEVEL.iter().map(|&o| top_left(o, VP)).collect();
        assert_eq!(
            corners,
            vec![
                IVec2::new(40, 240),
                IVec2::new(160, 240),
                IVec2::new(280, 240),
                IVec2::new(400, 240),
                IVec2::new(520, 240),
                IVec2::new(640, 240),
            ]
        );
        assert_eq!(screen_side(VP), 80.0);
    }

    #[test]
    fn fractional_corners_truncate() {
        let odd = Viewport::new(801, 601);
        // x = 400.5, y = 240.4
        assert_eq!(top_left(0.0, odd), IVec2::new(400, 240));
        assert_eq!(top_left(-0.9, odd), IVec2::new(40, 240));
        assert_eq!(top_left(0.6, odd), IVec2::new(640, 240));

        let hd = Viewport::new(1920, 1080);
        assert_eq!(top_left(-0.9, hd), IVec2::new(96, 432));
        assert_eq!(top_left(0.45, hd), IVec2::new(1392, 432));

        let small = Viewport::new(333, 77);
        assert_eq!(top_left(-0.9, small), IVec2::new(16, 30));
        assert_eq!(top_left(0.45, small), IVec2::new(241, 30));
    }

    #[test]
    fn boundary_pixels_of_every_level_cube_hit() {
        let scene = Scene::level();
        for vp in [VP, Viewport::new(801, 601), Viewport::new(400, 300)] {
            let side = screen_side(vp).floor() as i32;
            for (i, &o) in LEVEL.iter().enumerate() {
                let c = top_left(o, vp);
                for (x, y) in [
                    (c.x, c.y),
                    (c.x + side, c.y),
                    (c.x, c.y + side),
                    (c.x + side, c.y + side),
                ] {
                    assert_eq!(
                        pick(&scene, Click::new(x, y), vp),
                        Some(i),
                        "cube {i} at ({x}, {y}) on {}x{}",
                        vp.width,
                        vp.height
                    );
                }
            }
        }
    }

    #[test]
    fn one_pixel_outside_misses() {
        let scene = Scene::level();
        // first cube covers [40, 120] x [240, 320]
        assert_eq!(pick(&scene, Click::new(39, 240), VP), None);
        assert_eq!(pick(&scene, Click::new(121, 240), VP), None);
        assert_eq!(pick(&scene, Click::new(40, 239), VP), None);
        assert_eq!(pick(&scene, Click::new(120, 321), VP), None);
    }

    #[test]
    fn edges_are_inclusive() {
        let hb = HitBox {
            x_min: 10.0,
            x_max: 20.5,
            y_min: 5.0,
            y_max: 15.0,
        };
        assert!(hb.contains(Click::new(20, 15)));
        assert!(hb.contains(Click::new(10, 5)));
        assert!(!hb.contains(Click::new(21, 10)));
        assert!(!hb.contains(Click::new(15, 4)));
    }

    #[test]
    fn pick_scenario() {
        let scene = Scene::level();
        assert_eq!(pick(&scene, Click::new(50, 245), VP), Some(0));
        assert_eq!(pick(&scene, Click::new(0, 0), VP), None);
        assert_eq!(pick(&scene, Click::new(450, 300), VP), Some(3));
    }

    #[test]
    fn pick_reports_first_match_on_overlap() {
        let scene = Scene::new(vec![Cube::new(0.0, BLUE), Cube::new(0.1, BLUE)]);
        // x = 450 falls in both [400, 480] and [440, 520]
        assert_eq!(pick(&scene, Click::new(450, 250), VP), Some(0));
    }
}
