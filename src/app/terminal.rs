use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    style::SetBackgroundColor,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use std::io::{self, stdout};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;
use std::thread;

use crate::{
    core::{Color, Viewport},
    game::Click,
    pipeline::TermBuffer,
    DemoConfig,
};

use super::{Demo, Metrics, RunOutcome};

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static;

/// Runs `cleanup` ahead of the previous panic hook while alive. Dropping it
/// puts the previous hook back.
struct PanicHookGuard {
    previous: Arc<PanicHook>,
}

impl PanicHookGuard {
    fn install<F>(cleanup: F) -> Self
    where
        F: Fn() + Sync + Send + 'static,
    {
        let previous: Arc<PanicHook> = Arc::from(panic::take_hook());
        let chained = Arc::clone(&previous);
        panic::set_hook(Box::new(move |panic_info| {
            cleanup();
            eprintln!("\n=== Panic Occurred ===");
            chained(panic_info);
            error!("Panic occurred: {:?}", panic_info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // set_hook panics when called while unwinding
        if thread::panicking() {
            return;
        }
        let previous = Arc::clone(&self.previous);
        panic::set_hook(Box::new(move |panic_info| previous(panic_info)));
    }
}

/// Owns the terminal for the duration of a run: raw mode, alternate screen and
/// mouse capture are undone on drop or panic.
pub struct TerminalSession {
    _hook: PanicHookGuard,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        let hook = PanicHookGuard::install(|| {
            let _ = Self::cleanup_terminal();
        });

        enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            Hide,
            EnableMouseCapture,
            SetBackgroundColor(Color::BLACK.to_crossterm_color()),
        )?;
        Ok(Self { _hook: hook })
    }

    fn cleanup_terminal() -> io::Result<()> {
        let mut stdout = stdout();
        disable_raw_mode()?;
        execute!(stdout, Show, LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = Self::cleanup_terminal();
    }
}

/// One cell per pixel; the cube grid is the terminal's column/row grid.
pub fn run_terminal(config: &DemoConfig) -> io::Result<RunOutcome> {
    let _session = TerminalSession::start()?;

    let (cols, rows) = terminal::size()?;
    let mut viewport = Viewport::new(cols as usize, rows as usize);
    let mut demo = Demo::<TermBuffer>::new(viewport);
    demo.init();

    let mut metrics = Metrics::new(config.fps);

    loop {
        // Wait for input until the next frame is due
        if event::poll(metrics.until_next_frame())? {
            match event::read()? {
                Event::Key(key) => {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
                        info!("Closed before clearing the board");
                        return Ok(RunOutcome::Quit);
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => demo.press(Click::new(column as i32, row as i32)),
                Event::Resize(w, h) => viewport = Viewport::new(w as usize, h as usize),
                _ => {}
            }
        }

        if metrics.frame_due() {
            demo.display(viewport, None)?;
            metrics.update();
            if demo.is_won() {
                return Ok(RunOutcome::Won);
            }
        }
    }
}
