// External crates
use anyhow::{Context, Result};
use log::info;

// STD library
use std::time::{Duration, Instant};

use rusterizer::config::{Config, Precision, Snapshot};
use rusterizer::display::{Display, FrameControl};
use rusterizer::{Fix16, Scalar, Scene, ScreenSpace};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    info!("config: {config:?}");

    // Build thread pool for scanline-parallel fills
    let threads = config.threads();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build thread pool")?;
    info!("{threads} worker threads, parallel fill {}", if config.parallel { "on" } else { "off" });

    match config.precision {
        Precision::Float => run(&config, Scene::<f32>::default_quad(config.angular_velocity)),
        Precision::Fixed => run(&config, Scene::<Fix16>::default_quad(config.angular_velocity)),
    }
}

fn run<S: Scalar>(config: &Config, scene: Scene<S>) -> Result<()> {
    let mut screen = ScreenSpace::new(config.width, config.height);

    if let Some(snapshot) = &config.snapshot {
        return write_snapshot(config, &scene, &mut screen, snapshot);
    }

    let mut display = Display::create(config)?;
    let start = Instant::now();
    let mut frames: u64 = 0;

    while display.poll_events() == FrameControl::Continue {
        scene.render(&mut screen, start.elapsed(), config.parallel);
        display.present(&screen)?;
        frames += 1;
    }
    drop(display);
    info!("window closed");

    let secs = start.elapsed().as_secs_f64();
    info!("{frames} frames in {secs:.2}s ({:.1} fps)", frames as f64 / secs.max(f64::EPSILON));
    Ok(())
}

fn write_snapshot<S: Scalar>(
    config: &Config,
    scene: &Scene<S>,
    screen: &mut ScreenSpace,
    snapshot: &Snapshot,
) -> Result<()> {
    let stats = scene.render(screen, Duration::from_millis(snapshot.elapsed_ms), config.parallel);
    screen.save_png(&snapshot.path)?;
    info!(
        "wrote {} ({} px covered, angle {:.3} rad)",
        snapshot.path.display(),
        stats.pixels,
        stats.angle
    );
    Ok(())
}
