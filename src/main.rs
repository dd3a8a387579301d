#![warn(clippy::all)]

use clap::Parser;
use conway_term::{App, Config, Renderer};
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "conway_term")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal field, rendered to the terminal")]
struct Cli {
    /// Random seed for the generated field (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the greeting and the delay prompt
    #[arg(short, long)]
    quiet: bool,

    /// Do not clear the terminal between generations
    #[arg(long)]
    no_clear: bool,

    /// Stop after this many generations even if the field keeps changing
    #[arg(long)]
    max_generations: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::default();
    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let mut renderer = Renderer::new(io::stdout(), config.markers, !cli.no_clear);
    let mut input = io::stdin().lock();

    let (grid, delay) = match App::startup(&mut input, &mut renderer, &config, cli.seed, cli.quiet)
    {
        Ok(started) => started,
        Err(e) => {
            log::error!("{}", e);
            if let Err(e) = renderer.error() {
                log::error!("Failed to report error: {}", e);
            }
            return ExitCode::from(e.exit_code());
        }
    };

    let mut app = App::new(grid, renderer, delay).with_max_generations(cli.max_generations);
    match app.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
