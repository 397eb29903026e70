//! tonegate - Terminal viewer for gated, mixed sine tones
//!
//! Run with: cargo run -- [--headless]

mod cli;
mod duet;
mod ui;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use duet::Scene;
use ui::UiApp;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonegate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let scene = cli
        .duet()
        .render()
        .wrap_err("failed to render the duet")?;

    if cli.headless {
        print_summary(&scene);
        return Ok(());
    }

    run_tui(scene)
}

fn run_tui(scene: Scene) -> EyreResult<()> {
    info!("opening terminal UI");
    let mut terminal = ratatui::init();
    let result = UiApp::new(scene).run(&mut terminal);
    ratatui::restore();
    result
}

fn print_summary(scene: &Scene) {
    println!("=== tonegate ===");
    println!("Duration: {:.2} s", scene.duration);
    println!("Sample rate: {} Hz", scene.sample_rate);
    println!("Samples: {}", scene.time.len());
    println!();

    for v in &scene.voices {
        println!(
            "  {}: {:.2} Hz, gate {:.2}-{:.2} s, peak {:.3}, rms {:.3}",
            v.voice.name,
            v.voice.frequency,
            v.voice.start,
            v.voice.end().min(scene.duration),
            v.gated.peak(),
            v.gated.rms(),
        );
    }

    println!();
    println!(
        "Mix: peak {:.3}, rms {:.3}",
        scene.mix.peak(),
        scene.mix.rms()
    );
    println!(
        "Zoom: {} samples ({:.1} ms), timeline step: {}",
        scene.zoom_len,
        scene.zoom_seconds() * 1000.0,
        scene.plot_step
    );
}
