use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use collatz_viz::config::{DEFAULT_MAX_STEPS, VisualizerConfig};
use collatz_viz::export::{SequenceReport, write_report};
use collatz_viz::input::parse_start;
use collatz_viz::layout::CanvasSize;
use collatz_viz::sequence::collatz_sequence;

#[derive(Parser, Debug)]
#[command(author, version, about = "Visualize the Collatz sequence of a positive integer", long_about = None)]
struct Cli {
    /// Start value. The window opens already animated when given
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    number: Option<String>,

    /// Print the sequence and its layout as JSON instead of opening a window
    #[arg(long)]
    json: bool,

    /// Write the sequence and its layout as JSON to PATH instead of opening a window
    #[arg(long, value_name = "PATH")]
    export: Option<Utf8PathBuf>,

    /// Window width, also the canvas width used for headless layouts
    #[arg(long, default_value_t = 900.0)]
    width: f32,

    /// Window height, also the canvas height used for headless layouts
    #[arg(long, default_value_t = 700.0)]
    height: f32,

    /// Give up on sequences that have not reached 1 after this many steps
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,
}

impl Cli {
    fn config(&self) -> VisualizerConfig {
        VisualizerConfig {
            window_size: CanvasSize::new(self.width, self.height),
            max_steps: self.max_steps,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    if cli.json || cli.export.is_some() {
        return run_headless(&cli, &config);
    }
    run_gui(config, cli.number)
}

fn run_headless(cli: &Cli, config: &VisualizerConfig) -> Result<()> {
    let Some(text) = cli.number.as_deref() else {
        bail!("NUMBER is required with --json or --export");
    };
    let start = parse_start(text).with_context(|| format!("Invalid start value '{}'", text))?;
    let sequence = collatz_sequence(start, config.max_steps)?;
    let report = SequenceReport::new(sequence, config.window_size);
    if let Some(path) = &cli.export {
        write_report(path, &report)?;
    }
    if cli.json {
        println!("{}", report.to_json()?);
    }
    Ok(())
}

#[cfg(feature = "egui")]
fn run_gui(config: VisualizerConfig, number: Option<String>) -> Result<()> {
    use collatz_viz::egui_app::CollatzApp;
    use eframe::egui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Collatz Conjecture Animation")
            .with_inner_size([config.window_size.width, config.window_size.height]),
        ..Default::default()
    };
    eframe::run_native(
        "collatz-viz",
        options,
        Box::new(|_cc| Ok(Box::new(CollatzApp::new(config, number)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}

#[cfg(not(feature = "egui"))]
fn run_gui(_config: VisualizerConfig, _number: Option<String>) -> Result<()> {
    bail!("built without the 'egui' feature; use --json or --export, or rebuild with --features egui")
}
