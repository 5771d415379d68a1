use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use stripfx::clock::FrameClock;
use stripfx::color::BLACK;
use stripfx::config::{Config, Driver, PlaylistEntry};
use stripfx::random::{RandomSource, RngSource};
use stripfx::strip::{MemoryStrip, PixelStrip, TerminalStrip};
use stripfx::{EffectEngine, Effect, Result};

#[derive(Parser)]
#[command(version, about = "Animated effects for addressable RGB LED strips")]
struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of pixels, overrides the config file
    #[arg(short, long)]
    pixels: Option<usize>,

    /// Seed the random source, e.g. to replay a fire
    #[arg(long)]
    seed: Option<u64>,

    /// Render into memory instead of the terminal
    #[arg(long)]
    headless: bool,

    /// Run only this effect instead of the playlist
    #[command(subcommand)]
    effect: Option<Effect>,
}

fn load_config(args: &Cli) -> Result<Config> {
    let mut config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(pixels) = args.pixels {
        config.strip.pixel_count = pixels;
    }
    if args.headless {
        config.output.driver = Driver::Memory;
    }

    config.validated()
}

fn create_strip(driver: Driver, pixel_count: usize) -> Box<dyn PixelStrip> {
    match driver {
        Driver::Terminal => Box::new(TerminalStrip::new(pixel_count)),
        Driver::Memory => Box::new(MemoryStrip::without_history(pixel_count)),
    }
}

fn create_random(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    }
}

fn run(args: Cli) -> Result<()> {
    let config = load_config(&args)?;
    let playlist = match args.effect {
        Some(effect) => {
            config.check_effect(&effect)?;
            vec![PlaylistEntry::new(effect, 1)]
        }
        None => config.playlist.clone(),
    };

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        if let Err(err) = ctrlc::set_handler(move || running.store(false, Ordering::SeqCst)) {
            log::warn!("Cannot install Ctrl-C handler: {err}");
        }
    }

    let mut engine = EffectEngine::with_heat_overflow(
        create_strip(config.output.driver, config.strip.pixel_count),
        FrameClock::new(config.output.measure_fps),
        create_random(args.seed),
        config.strip.heat_overflow,
    )?;
    engine.init();
    log::info!(
        "Driving {} pixels, {} playlist entries",
        engine.pixel_count(),
        playlist.len()
    );

    'show: while running.load(Ordering::SeqCst) {
        for entry in &playlist {
            log::info!("{} x{}", entry.effect.name(), entry.repeat);
            for _ in 0..entry.repeat {
                if !running.load(Ordering::SeqCst) {
                    break 'show;
                }
                engine.run(&entry.effect)?;
            }
        }
    }

    log::info!("Shutting down");
    engine.set_all_val(BLACK);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    if let Err(err) = run(args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
