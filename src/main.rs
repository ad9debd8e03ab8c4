//! tetris-sfx - fire the tetris minigame sound effects from the command line

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{SfxConfig, DEFAULT_CONFIG_PATH};
use std::{path::PathBuf, thread, time::Duration};
use tetris_sfx_audio::{Clip, SoundBoard, SoundEffect};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tetris minigame sound effects", long_about = None)]
struct Args {
    /// Effects to trigger in order (change, drop, break)
    effects: Vec<SoundEffect>,

    /// Sound configuration file (TOML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory the site is served from; overrides the config file
    #[arg(long)]
    web_root: Option<PathBuf>,

    /// Delay between triggers in milliseconds; overrides the config file
    #[arg(long)]
    gap_ms: Option<u64>,

    /// Wait before exiting in milliseconds; overrides the config file
    #[arg(long)]
    linger_ms: Option<u64>,

    /// Write the effective configuration back to the config path and exit
    #[arg(long)]
    write_config: bool,
}

impl Args {
    /// Command-line values take precedence over the config file.
    fn apply_overrides(&self, config: &mut SfxConfig) {
        if let Some(web_root) = &self.web_root {
            config.web_root = web_root.clone();
        }
        if let Some(gap_ms) = self.gap_ms {
            config.gap_ms = gap_ms;
        }
        if let Some(linger_ms) = self.linger_ms {
            config.linger_ms = linger_ms;
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting tetris-sfx v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut config = SfxConfig::load_from_path(&args.config);
    args.apply_overrides(&mut config);

    if args.write_config {
        config
            .save_to_path(&args.config)
            .with_context(|| format!("failed to write {}", args.config.display()))?;
        info!("Wrote {}", args.config.display());
        return Ok(());
    }

    if args.effects.is_empty() {
        warn!("No effects given; nothing to play");
        return Ok(());
    }

    play_effects(&config, &args.effects)
}

#[cfg(feature = "audio")]
fn play_effects(config: &SfxConfig, effects: &[SoundEffect]) -> Result<()> {
    use tetris_sfx_audio::RodioOutput;

    let output = RodioOutput::try_default().context("failed to open audio output")?;
    let mut board = output
        .load_board(&config.web_root, &config.sounds)
        .with_context(|| format!("failed to load sounds under {}", config.web_root.display()))?;
    run(&mut board, config, effects);
    Ok(())
}

#[cfg(not(feature = "audio"))]
fn play_effects(config: &SfxConfig, effects: &[SoundEffect]) -> Result<()> {
    info!("Audio backend disabled; using silent sound board");
    let mut board = SoundBoard::silent();
    run(&mut board, config, effects);
    Ok(())
}

fn run<C: Clip>(board: &mut SoundBoard<C>, config: &SfxConfig, effects: &[SoundEffect]) {
    let gap = Duration::from_millis(config.gap_ms);
    for (i, effect) in effects.iter().enumerate() {
        if i > 0 {
            thread::sleep(gap);
        }
        board.trigger(*effect);
        info!("{} -> {:?}", effect, board.state(*effect));
    }
    thread::sleep(Duration::from_millis(config.linger_ms));
}
