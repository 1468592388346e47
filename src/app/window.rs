use std::io;

use log::{info, warn};
use minifb::{Key, MouseButton, MouseMode, Scale, Window, WindowOptions};

use crate::{
    core::Viewport,
    game::{Click, GameEvent},
    pipeline::FrameBuffer,
    DemoConfig,
};

use super::{Demo, Metrics, RunOutcome};

pub fn run_window(config: &DemoConfig) -> io::Result<RunOutcome> {
    let mut window = Window::new(
        "Cube Shooter",
        config.width,
        config.height,
        WindowOptions {
            resize: false,
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    window.set_target_fps(config.fps as usize);

    let mut demo = Demo::<FrameBuffer>::new(Viewport::new(config.width, config.height));
    demo.init();

    let mut metrics = Metrics::new(config.fps);
    let mut was_down = false;

    while window.is_open() {
        if window.is_key_down(Key::Escape) || window.is_key_down(Key::Q) {
            info!("Closed before clearing the board");
            return Ok(RunOutcome::Quit);
        }

        // Only the press edge counts as a click
        let down = window.get_mouse_down(MouseButton::Left);
        if down && !was_down {
            match window.get_mouse_pos(MouseMode::Discard) {
                Some((x, y)) => demo.press(Click::new(x as i32, y as i32)),
                None => warn!("Mouse press outside the window"),
            }
        }
        was_down = down;

        let (w, h) = window.get_size();
        let events = demo.display(Viewport::new(w, h), Some(&mut window))?;
        metrics.update();

        if events.contains(&GameEvent::Won) {
            return Ok(RunOutcome::Won);
        }
    }

    Ok(RunOutcome::Quit)
}
