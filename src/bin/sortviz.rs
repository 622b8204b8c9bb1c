//! sortviz: print the state stream of a sorting algorithm.
//!
//! Run: `sortviz --algorithm quick --array 5,3,8,1`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use sortviz::config::Config;
use sortviz::output::{frame_to_svg, TerminalMode, TerminalRenderer};
use sortviz::prelude::{AlgorithmId, Theme, Value};
use sortviz::session::random_array;
use sortviz::Session;

/// sortviz: step through sorting algorithms
#[derive(Parser, Debug)]
#[command(name = "sortviz")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Step-by-step sorting algorithm visualizer", long_about = None)]
struct Cli {
    /// Algorithm id (bubble, selection, insertion, quick)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Input values, comma separated
    #[arg(long, value_delimiter = ',')]
    array: Option<Vec<Value>>,

    /// Random array size when no --array is given
    #[arg(short, long)]
    size: Option<usize>,

    /// Seed for the random array
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path (default: <config dir>/sortviz/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the dark theme
    #[arg(long)]
    dark: bool,

    /// Container width in pixels
    #[arg(short, long)]
    width: Option<u32>,

    /// Plain text bars without ANSI colors
    #[arg(long)]
    plain: bool,

    /// Print the state sequence as JSON
    #[arg(long)]
    json: bool,

    /// Print only this state
    #[arg(long)]
    step: Option<usize>,

    /// Also write the selected (or final) frame as SVG
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load_or_default(
            dirs::config_dir()
                .map(|p| p.join("sortviz/config.yaml"))
                .unwrap_or_default(),
        ),
    };

    let algorithm: AlgorithmId = match &cli.algorithm {
        Some(id) => id.parse()?,
        None => config.algorithm()?,
    };

    let array = match cli.array {
        Some(values) => values,
        None => {
            let vis = &config.visualization;
            let size = cli.size.unwrap_or(vis.size).clamp(1, vis.max_size.max(1));
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            random_array(size, vis.max_value, &mut rng)
        }
    };

    let mut session = Session::new(algorithm, array);
    if let Some(step) = cli.step {
        session.seek(step)?;
    }

    if cli.json {
        let states = match cli.step {
            Some(_) => std::slice::from_ref(session.current_state()),
            None => session.states(),
        };
        println!("{}", serde_json::to_string_pretty(states)?);
        return Ok(());
    }

    let theme = if cli.dark {
        Theme::Dark
    } else {
        config.theme()
    };
    let width = cli.width.unwrap_or(config.visualization.container_width);
    let mode = if cli.plain {
        TerminalMode::Plain
    } else {
        TerminalMode::AnsiTrueColor
    };
    let renderer = TerminalRenderer::new().mode(mode);

    if cli.step.is_some() {
        print_step(&renderer, &session, theme, width);
    } else {
        loop {
            print_step(&renderer, &session, theme, width);
            if !session.step_forward() {
                break;
            }
        }
    }

    if let Some(path) = &cli.svg {
        frame_to_svg(&session.frame(theme, width), 240)
            .write_to_file(path)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "SVG frame written");
    }

    Ok(())
}

fn print_step(renderer: &TerminalRenderer, session: &Session, theme: Theme, width: u32) {
    println!(
        "[{}/{}] {}",
        session.current_index() + 1,
        session.len(),
        session.algorithm()
    );
    renderer.print(&session.frame(theme, width));
    println!();
}
