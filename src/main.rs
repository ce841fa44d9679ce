use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use grid_snake::app::App;
use grid_snake::error::AppError;
use grid_snake::game::GameEngine;
use grid_snake::input::GameInput;
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement; the same seed replays the same food sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file. Filter with `RUST_LOG` (default `info`).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(seed),
        None => GameEngine::new(),
    };
    let mut app = App::new(engine);
    let mut session = TerminalSession::enter()?;

    log::info!("session started (seed: {:?})", cli.seed);
    while !app.should_quit() {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match GameInput::try_from(key) {
                        Ok(input) => app.handle_input(input, Instant::now()),
                        Err(unmapped) => log::trace!("{unmapped}"),
                    }
                }
            }
        }

        app.on_tick(Instant::now());
    }

    log::info!("session ended with score {}", app.state().score);
    Ok(())
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
