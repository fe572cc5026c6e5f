use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod driver;
mod errors;
mod presenter;
mod render;
mod runner;

use config::{ArmConfig, PRESETS};
use errors::ArmsimErrors;
use render::TextRenderer;
use runner::{RunOptions, analyze_frame, run_animation};

#[derive(Debug, Parser)]
#[command(version, about = "Forward kinematics for serial-link arms", long_about = None)]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Name of a built-in preset
    #[arg(long)]
    preset: Option<String>,
    /// Path to a RON arm configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Source {
    fn load(&self) -> Result<ArmConfig, ArmsimErrors> {
        match (&self.preset, &self.config) {
            (_, Some(path)) => {
                info!(path = %path.display(), "loading config");
                ArmConfig::load(path)
            }
            (Some(name), None) => ArmConfig::preset(name),
            (None, None) => Err(ArmsimErrors::NoSource),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Animate an arm and print every frame
    Run {
        #[command(flatten)]
        source: Source,
        /// Record joint positions as csv into this directory
        #[arg(long)]
        output: Option<PathBuf>,
        /// Ignore the configured frame interval
        #[arg(long)]
        no_delay: bool,
    },
    /// Print the diagnostics of a single frame
    Analyze {
        #[command(flatten)]
        source: Source,
        /// Zero based frame index
        #[arg(long)]
        frame: usize,
    },
    /// List the built-in presets
    Presets,
    /// Write a preset as a RON config file
    Export {
        #[arg(long)]
        preset: String,
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // RUST_LOG wins over the -v count
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn execute(command: Commands) -> Result<(), ArmsimErrors> {
    match command {
        Commands::Run {
            source,
            output,
            no_delay,
        } => {
            let config = source.load()?;
            let options = RunOptions {
                output,
                delay: !no_delay,
            };
            let summary = {
                let mut renderer = TextRenderer::new(io::stdout().lock(), config.kind);
                run_animation(&config, &options, &mut renderer)?
            };

            if let Some(last) = &summary.last {
                println!();
                let heading = format!(
                    "'{}': {} frames in {}, final frame",
                    config.name,
                    summary.frames,
                    utilities::format_duration(summary.elapsed)
                );
                println!("{}", heading.bright_blue());
                println!("{}", last.panel());
            }
            if let Some(path) = &summary.recorded {
                success(&format!("poses written to {}", path.display()));
            }
        }
        Commands::Analyze { source, frame } => {
            let config = source.load()?;
            let solution = analyze_frame(&config, frame)?;
            println!("{}", format!("frame {frame} of '{}'", config.name).bright_blue());
            println!("{}", solution.panel());
        }
        Commands::Presets => {
            for name in PRESETS {
                let config = ArmConfig::preset(name)?;
                println!(
                    "{:<14} {:?}, {} links, {} frames",
                    name.bright_blue(),
                    config.kind,
                    config.links.len(),
                    config.animation.frame_count()
                );
            }
        }
        Commands::Export { preset, file } => {
            let config = ArmConfig::preset(&preset)?;
            config.save(&file)?;
            success(&format!("preset '{preset}' written to {}", file.display()));
        }
    }
    Ok(())
}

fn success(s: &str) {
    println!("{}", s.green())
}
