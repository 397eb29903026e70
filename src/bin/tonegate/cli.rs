//! Command-line flags, mapped onto the duet builder

use clap::Parser;

use super::duet::Duet;

/// Two sine tones, the second entering late, gated, mixed and plotted
#[derive(Debug, Parser)]
#[command(name = "tonegate", version, about, long_about = None)]
pub struct Cli {
    /// Scene length in seconds
    #[arg(long, env = "TONEGATE_DURATION", default_value_t = 1.5)]
    pub duration: f64,

    /// Samples per second
    #[arg(long, env = "TONEGATE_SAMPLE_RATE", default_value_t = 8000)]
    pub sample_rate: u32,

    /// Label of the first tone
    #[arg(long, default_value = "C4")]
    pub first_name: String,

    /// Frequency of the first tone in Hz
    #[arg(long, default_value_t = 261.63)]
    pub first_freq: f64,

    /// Label of the second tone
    #[arg(long, default_value = "F4")]
    pub second_name: String,

    /// Frequency of the second tone in Hz (a perfect fourth above C4 by default)
    #[arg(long, default_value_t = 349.23)]
    pub second_freq: f64,

    /// Seconds each tone sounds
    #[arg(long, default_value_t = 1.0)]
    pub gate_length: f64,

    /// Entrance delay of the second tone in seconds
    #[arg(long, default_value_t = 0.35)]
    pub delay: f64,

    /// Length of the zoomed view in milliseconds
    #[arg(long, default_value_t = 25.0)]
    pub zoom_ms: f64,

    /// Print a summary instead of opening the terminal UI
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    pub fn duet(&self) -> Duet {
        Duet::new()
            .duration(self.duration)
            .sample_rate(self.sample_rate)
            .zoom(self.zoom_ms / 1000.0)
            .voice(&self.first_name, self.first_freq, 0.0, self.gate_length)
            .voice(&self.second_name, self.second_freq, self.delay, self.gate_length)
    }
}
