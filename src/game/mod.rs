pub mod picker;

use std::fmt::{self, Display, Formatter};

use log::{debug, info};

use crate::core::{Cube, Scene, Viewport};

/// A pointer press in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub x: i32,
    pub y: i32,
}

impl Click {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Display for Click {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Single-slot click buffer. A newer press overwrites an unconsumed one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingClick {
    slot: Option<Click>,
}

impl PendingClick {
    pub fn record(&mut self, click: Click) {
        if let Some(old) = self.slot.replace(click) {
            debug!("Click at {} dropped in favour of {}", old, click);
        }
    }

    pub fn take(&mut self) -> Option<Click> {
        self.slot.take()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
}

/// What happened during one frame's simulate step.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// `index` is the cube's position at the time it was hit
    CubeRemoved { index: usize, cube: Cube },
    /// The last cube is gone. Reported exactly once.
    Won,
}

/// Everything the frame driver owns between frames.
#[derive(Debug, Clone)]
pub struct GameState {
    scene: Scene,
    pending: PendingClick,
    status: Status,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Scene::level())
    }
}

impl GameState {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            pending: PendingClick::default(),
            status: Status::Playing,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Pointer-press input. Ignored once the game is over.
    pub fn press(&mut self, click: Click) {
        if self.status == Status::Playing {
            self.pending.record(click);
        }
    }

    pub fn has_pending_click(&self) -> bool {
        self.pending.is_pending()
    }

    /// Consumes the pending click (if any) against the current scene, then
    /// checks for victory. At most one cube is removed per call.
    pub fn update(&mut self, viewport: Viewport) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.status == Status::Won {
            return events;
        }

        if let Some(click) = self.pending.take() {
            match picker::pick(&self.scene, click, viewport) {
                Some(index) => {
                    if let Some(cube) = self.scene.remove(index) {
                        info!("Cube number {} was clicked! ({})", index + 1, cube);
                        events.push(GameEvent::CubeRemoved { index, cube });
                    }
                }
                None => debug!("Click at {} missed every cube", click),
            }
        }

        if self.scene.is_empty() {
            self.status = Status::Won;
            info!("All cubes cleared");
            events.push(GameEvent::Won);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{BLUE, GREEN, PURPLE};
    use crate::game::picker::top_left;

    const VP: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    fn click_on(offset: f64) -> Click {
        let corner = top_left(offset, VP);
        Click::new(corner.x + 5, corner.y + 5)
    }

    #[test]
    fn last_click_wins() {
        let mut slot = PendingClick::default();
        slot.record(Click::new(1, 1));
        slot.record(Click::new(2, 2));
        assert_eq!(slot.take(), Some(Click::new(2, 2)));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn miss_leaves_scene_alone() {
        let mut game = GameState::default();
        game.press(Click::new(0, 0));
        assert!(game.update(VP).is_empty());
        assert_eq!(game.scene().len(), 6);
        assert!(!game.has_pending_click());
    }

    #[test]
    fn frame_without_click_does_nothing() {
        let mut game = GameState::default();
        assert!(game.update(VP).is_empty());
        assert_eq!(game.scene().len(), 6);
    }

    #[test]
    fn hit_removes_exactly_that_cube() {
        let mut game = GameState::default();
        game.press(click_on(-0.3));
        let events = game.update(VP);
        assert_eq!(
            events,
            vec![GameEvent::CubeRemoved {
                index: 2,
                cube: Cube::new(-0.3, GREEN)
            }]
        );

        let remaining: Vec<Cube> = game.scene().cubes().to_vec();
        assert_eq!(
            remaining,
            vec![
                Cube::new(-0.9, BLUE),
                Cube::new(-0.6, PURPLE),
                Cube::new(0.0, BLUE),
                Cube::new(0.3, PURPLE),
                Cube::new(0.6, GREEN),
            ]
        );
    }

    #[test]
    fn clearing_every_cube_wins_once() {
        let mut game = GameState::default();
        let mut wins = 0;
        for offset in [0.6f64, -0.9, 0.0, -0.3, 0.3, -0.6] {
            assert_eq!(game.status(), Status::Playing);
            game.press(click_on(offset));
            let events = game.update(VP);
            assert!(matches!(events[0], GameEvent::CubeRemoved { .. }));
            wins += events.iter().filter(|e| **e == GameEvent::Won).count();
        }
        assert!(game.scene().is_empty());
        assert_eq!(game.status(), Status::Won);

        // later frames and clicks change nothing
        game.press(click_on(0.0));
        wins += game
            .update(VP)
            .iter()
            .filter(|e| **e == GameEvent::Won)
            .count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn only_one_cube_per_click_even_when_boxes_overlap() {
        let scene = Scene::new(vec![Cube::new(0.0, BLUE), Cube::new(0.05, PURPLE)]);
        let mut game = GameState::new(scene);
        game.press(Click::new(450, 250));
        let events = game.update(VP);
        assert_eq!(events.len(), 1);
        assert_eq!(game.scene().cubes(), &[Cube::new(0.05, PURPLE)]);
    }

    #[test]
    fn empty_scene_wins_on_first_frame() {
        let mut game = GameState::new(Scene::default());
        assert_eq!(game.update(VP), vec![GameEvent::Won]);
        assert!(game.update(VP).is_empty());
    }
}
