use std::fs::OpenOptions;
use std::io;
use std::sync::atomic::Ordering;

use cube_shooter::{
    app::{terminal::run_terminal, window::run_window, RunOutcome},
    create_clap_command, handle_clap_matches, DisplayTarget, DEBUG_PIPELINE,
};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

const LOG_FILE: &str = "cube_shooter.log";

fn init_logging(target: DisplayTarget, trace: bool) -> io::Result<()> {
    let level = if trace {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    let result = match target {
        // stdout is the drawing surface, so log to a file instead
        DisplayTarget::Terminal => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(LOG_FILE)?;
            WriteLogger::init(level, Config::default(), log_file)
        }
        DisplayTarget::Window => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    result.map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

fn main() -> io::Result<()> {
    let matches = create_clap_command().get_matches();
    let (config, trace) = handle_clap_matches(&matches);

    init_logging(config.target, trace)?;
    DEBUG_PIPELINE.store(trace, Ordering::Relaxed);
    info!("Starting {:?}", config);

    let outcome = match config.target {
        DisplayTarget::Window => run_window(&config)?,
        DisplayTarget::Terminal => run_terminal(&config)?,
    };

    if outcome == RunOutcome::Won {
        println!("You won !\nBye :)");
    }
    Ok(())
}
