//! Duet scene - builder and pure rendering of gated, mixed tones

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tonegate::{gate, generate, mix, time_axis, Signal};

/// Plotted points per second of timeline, before decimation kicks in
const TIMELINE_POINTS_PER_SECOND: u32 = 200;

/// One tone in the duet, sounding over `[start, start + length)`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub name: String,
    pub frequency: f64,
    pub start: f64,
    pub length: f64,
}

impl Voice {
    pub fn end(&self) -> f64 {
        self.start + self.length
    }
}

/// Scene builder
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Duet {
    duration: f64,
    sample_rate: u32,
    zoom: f64,
    voices: Vec<Voice>,
}

impl Duet {
    /// Create an empty scene: 1.5 s at 8 kHz with a 25 ms zoom
    pub fn new() -> Self {
        Self {
            duration: 1.5,
            sample_rate: 8000,
            zoom: 0.025,
            voices: Vec::new(),
        }
    }

    /// Total length of the scene in seconds
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Length of the zoomed view in seconds
    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Add a tone gated to `[start, start + length)`
    pub fn voice(mut self, name: &str, frequency: f64, start: f64, length: f64) -> Self {
        self.voices.push(Voice {
            name: name.to_owned(),
            frequency,
            start,
            length,
        });
        self
    }

    /// Generate, gate and mix every voice.
    pub fn render(&self) -> tonegate::Result<Scene> {
        let time = time_axis(self.duration, self.sample_rate)?;

        let mut voices = Vec::with_capacity(self.voices.len());
        for voice in &self.voices {
            let raw = generate(voice.frequency, self.duration, self.sample_rate)?;
            let gated = gate(
                &raw,
                voice.start,
                voice.end(),
                self.duration,
                self.sample_rate,
            )?;
            debug!(
                name = %voice.name,
                frequency = voice.frequency,
                start = voice.start,
                end = voice.end(),
                "rendered voice"
            );
            voices.push(RenderedVoice {
                voice: voice.clone(),
                raw,
                gated,
            });
        }

        let mix = mix(voices.iter().map(|v| &v.gated))?;

        let zoom_len = ((self.zoom.max(0.0) * f64::from(self.sample_rate)) as usize).min(time.len());
        let plot_step = (self.sample_rate / TIMELINE_POINTS_PER_SECOND).max(1) as usize;

        info!(
            voices = voices.len(),
            samples = time.len(),
            peak = mix.peak(),
            "duet rendered"
        );

        Ok(Scene {
            duration: self.duration,
            sample_rate: self.sample_rate,
            time,
            voices,
            mix,
            zoom_len,
            plot_step,
        })
    }
}

impl Default for Duet {
    fn default() -> Self {
        Self::new()
    }
}

/// A voice with its ungated and gated signals
#[derive(Debug, Clone)]
pub struct RenderedVoice {
    pub voice: Voice,
    pub raw: Signal,
    pub gated: Signal,
}

/// Labelled points ready for a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Everything the renderers need, computed once
#[derive(Debug, Clone)]
pub struct Scene {
    pub duration: f64,
    pub sample_rate: u32,
    pub time: Signal,
    pub voices: Vec<RenderedVoice>,
    pub mix: Signal,
    /// Samples shown in the zoomed view
    pub zoom_len: usize,
    /// Decimation step for the timeline view
    pub plot_step: usize,
}

impl Scene {
    /// Seconds covered by the zoomed view
    pub fn zoom_seconds(&self) -> f64 {
        self.zoom_len as f64 / f64::from(self.sample_rate)
    }

    /// Raw tones over the first `zoom_len` samples, so cycles are visible
    pub fn zoom_series(&self) -> Vec<Series> {
        self.voices
            .iter()
            .map(|v| Series {
                label: format!("{} {:.2} Hz", v.voice.name, v.voice.frequency),
                points: self.points(&v.raw, self.zoom_len, 1),
            })
            .collect()
    }

    /// Gated tones and their mix over the whole scene, decimated
    pub fn timeline_series(&self) -> Vec<Series> {
        let mut series: Vec<Series> = self
            .voices
            .iter()
            .map(|v| Series {
                label: format!(
                    "{} {:.2}-{:.2} s",
                    v.voice.name,
                    v.voice.start,
                    v.voice.end().min(self.duration)
                ),
                points: self.points(&v.gated, self.time.len(), self.plot_step),
            })
            .collect();
        series.push(Series {
            label: "mix".to_owned(),
            points: self.points(&self.mix, self.time.len(), self.plot_step),
        });
        series
    }

    fn points(&self, signal: &Signal, len: usize, step: usize) -> Vec<(f64, f64)> {
        self.time
            .iter()
            .zip(signal.iter())
            .take(len)
            .step_by(step)
            .map(|(&t, &x)| (t, x))
            .collect()
    }
}
