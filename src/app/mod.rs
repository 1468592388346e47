use std::io;

use log::info;
use minifb::Window;

use crate::{
    core::Viewport,
    game::{picker::top_left, Click, GameEvent, GameState, Status},
    pipeline::{Buffer, Pipeline, RenderSettings},
};

pub mod metrics;
pub mod terminal;
pub mod window;

pub use metrics::Metrics;

/// How a run of the demo ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Won,
    Quit,
}

/// The game plus the pipeline that draws it. Display targets drive this
/// through `init` once and `display` every frame.
pub struct Demo<B: Buffer> {
    pub game: GameState,
    pub pipeline: Pipeline<B>,
}

impl<B: Buffer> Demo<B> {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            game: GameState::default(),
            pipeline: Pipeline::new(viewport),
        }
    }

    pub fn init(&mut self) {
        self.pipeline.init(RenderSettings::default());

        let viewport = self.pipeline.viewport();
        let names = ["First", "Second", "Third"];
        for (name, cube) in names.iter().zip(self.game.scene().cubes()) {
            let corner = top_left(cube.offset, viewport);
            info!("{} cube at ({}, {})", name, corner.x, corner.y);
        }
    }

    pub fn press(&mut self, click: Click) {
        self.game.press(click);
    }

    /// One frame: draw the current scene, then resolve the pending click.
    pub fn display(
        &mut self,
        viewport: Viewport,
        window: Option<&mut Window>,
    ) -> io::Result<Vec<GameEvent>> {
        self.pipeline.resize(viewport);
        self.pipeline.render_frame(self.game.scene(), window)?;
        Ok(self.game.update(viewport))
    }

    pub fn is_won(&self) -> bool {
        self.game.status() == Status::Won
    }
}
