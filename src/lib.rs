use clap::{value_parser, Arg, Command};

pub mod app;
pub mod core;
pub mod game;
pub mod pipeline;

pub use crate::core::{Color, Cube, Scene, Viewport};
pub use game::{Click, GameEvent, GameState};

pub const DEFAULT_WIDTH: usize = 800;
pub const DEFAULT_HEIGHT: usize = 600;
pub const DEFAULT_FPS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTarget {
    Terminal,
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    pub target: DisplayTarget,
    pub width: usize,
    pub height: usize,
    pub fps: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            target: DisplayTarget::Window,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
        }
    }
}

pub static DEBUG_PIPELINE: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

// Helper macro for per-frame pipeline tracing
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        if $crate::DEBUG_PIPELINE.load(std::sync::atomic::Ordering::Relaxed) {
            log::trace!($($arg)*);
        }
    };
}

fn play_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("mode")
            .short('m')
            .long("mode")
            .value_name("MODE")
            .help("Where to draw ('window', 'terminal', 'w', or 't')")
            .required(false)
            .value_parser(["window", "terminal", "w", "t"]), // Accept both long and shorthand
    )
    .arg(
        Arg::new("fps")
            .long("fps")
            .value_name("FPS")
            .help("Target frame rate")
            .required(false)
            .value_parser(value_parser!(u32).range(1..)),
    )
    .arg(
        Arg::new("width")
            .long("width")
            .value_name("PIXELS")
            .help("Window width (window mode only)")
            .required(false)
            .value_parser(value_parser!(usize)),
    )
    .arg(
        Arg::new("height")
            .long("height")
            .value_name("PIXELS")
            .help("Window height (window mode only)")
            .required(false)
            .value_parser(value_parser!(usize)),
    )
    .arg(
        Arg::new("trace")
            .long("trace")
            .help("Log per-frame pipeline details")
            .action(clap::ArgAction::SetTrue),
    )
}

pub fn create_clap_command() -> Command {
    play_args(
        Command::new("cube_shooter")
            .about("Click every cube to win")
            .version("0.1")
            .subcommand(play_args(
                Command::new("play").about("Play in a window (minifb) or in the terminal"),
            )),
    )
}

/// Reads the demo settings from either the top-level arguments or the `play`
/// subcommand. The second value is the `--trace` flag.
pub fn handle_clap_matches(matches: &clap::ArgMatches) -> (DemoConfig, bool) {
    let matches = match matches.subcommand() {
        Some(("play", sub_matches)) => sub_matches,
        _ => matches,
    };
    let defaults = DemoConfig::default();

    let target = match matches.get_one::<String>("mode").map(|s| s.as_str()) {
        Some("terminal" | "t") => DisplayTarget::Terminal,
        _ => DisplayTarget::Window,
    };

    let config = DemoConfig {
        target,
        width: matches
            .get_one::<usize>("width")
            .copied()
            .unwrap_or(defaults.width),
        height: matches
            .get_one::<usize>("height")
            .copied()
            .unwrap_or(defaults.height),
        fps: matches.get_one::<u32>("fps").copied().unwrap_or(defaults.fps),
    };
    (config, matches.get_flag("trace"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> (DemoConfig, bool) {
        let matches = create_clap_command()
            .try_get_matches_from(args)
            .unwrap();
        handle_clap_matches(&matches)
    }

    #[test]
    fn no_arguments_matches_the_classic_setup() {
        assert_eq!(parse(&["cube_shooter"]), (DemoConfig::default(), false));
        assert_eq!(DemoConfig::default().fps, 300);
    }

    #[test]
    fn play_subcommand_and_shorthands() {
        let (config, trace) = parse(&["cube_shooter", "play", "-m", "t", "--fps", "60", "--trace"]);
        assert_eq!(config.target, DisplayTarget::Terminal);
        assert_eq!(config.fps, 60);
        assert!(trace);

        let (config, _) = parse(&["cube_shooter", "--width", "1024", "--height", "768"]);
        assert_eq!(config.target, DisplayTarget::Window);
        assert_eq!((config.width, config.height), (1024, 768));
    }

    #[test]
    fn rejects_bad_values() {
        let cmd = create_clap_command();
        assert!(cmd.clone().try_get_matches_from(["cube_shooter", "--fps", "0"]).is_err());
        assert!(cmd.try_get_matches_from(["cube_shooter", "-m", "video"]).is_err());
    }
}
