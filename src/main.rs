use clap::Parser;
use storage_viewer::cli::Cli;
use storage_viewer::config::Config;
use storage_viewer::error::{AppError, ConfigError};
use storage_viewer::headless::{apply_steps, dump_frame};
use storage_viewer::logging::init_logging;
use storage_viewer::runtime::{Command, Reducer, Runtime};
use storage_viewer::source::open_source;
use storage_viewer::state::{AppState, ViewerPanel};
use storage_viewer::terminal::{Terminal, TerminalSize};
use storage_viewer::ui::renderer::Renderer;
use tracing::info;

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(&cli)?;
    init_logging(&config)?;

    let path = config.source.as_deref().ok_or(ConfigError::MissingSource)?;
    let source = open_source(path, config.kind)?;
    info!(source = %source.describe(), "starting viewer");

    let mut state = AppState::new(ViewerPanel::new(source, config.panel_options()));

    if cli.dump {
        // Headless: a load failure is fatal instead of a status message.
        state.panel_mut().show()?;
        apply_steps(&mut state, &cli.navigate);
        let size = TerminalSize {
            width: cli.width,
            height: cli.height,
        };
        let dump = dump_frame(&state, &Renderer::default(), size);
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    if config.open_on_start {
        Reducer::reduce(&mut state, Command::ShowPanel);
        apply_steps(&mut state, &cli.navigate);
    }

    let terminal = Terminal::new()?;
    let mut runtime = Runtime::new(state, terminal);
    runtime.run()?;
    Ok(())
}
