//! Recipes: a duration, a body, a fade and a gain.
//!
//! Rendering produces `floor(duration * sample_rate)` samples, each equal to
//! `body * fade * gain`.

use serde::Serialize;

use crate::envelope::Fade;
use crate::voice::Voice;

/// Sound body: one voice for the whole duration, or consecutive segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "voices", rename_all = "snake_case")]
pub enum Body {
    /// A single voice spanning the sound.
    Single(Voice),
    /// Equal-length, non-overlapping segments played back to back. Segment
    /// `k` of `n` covers samples `[k * total / n, (k + 1) * total / n)` and
    /// is rendered with its own local index, length and time.
    Segments(&'static [Voice]),
}

impl Body {
    /// Renders `total` raw samples at `sample_rate`.
    pub fn render(&self, total: usize, sample_rate: f64) -> Vec<f64> {
        match self {
            Body::Single(voice) => render_voice(voice, total, sample_rate),
            Body::Segments(voices) => {
                let count = voices.len();
                let mut out = Vec::with_capacity(total);
                for (k, voice) in voices.iter().enumerate() {
                    let start = k * total / count;
                    let end = (k + 1) * total / count;
                    out.extend(render_voice(voice, end - start, sample_rate));
                }
                // Empty segment list renders silence.
                out.resize(total, 0.0);
                out
            }
        }
    }

    /// Voices making up this body.
    pub fn voices(&self) -> &[Voice] {
        match self {
            Body::Single(voice) => std::slice::from_ref(voice),
            Body::Segments(voices) => voices,
        }
    }

    /// Short description of the synthesis strategy.
    pub fn strategy(&self) -> String {
        match self {
            Body::Single(voice) => voice.strategy(),
            Body::Segments(voices) => {
                let inner: Vec<String> = voices.iter().map(Voice::strategy).collect();
                format!("segments[{}]", inner.join(","))
            }
        }
    }
}

fn render_voice(voice: &Voice, total: usize, sample_rate: f64) -> Vec<f64> {
    (0..total)
        .map(|i| voice.sample(i, total, i as f64 / sample_rate))
        .collect()
}

/// A fully specified sound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recipe {
    /// Duration in seconds.
    pub duration: f64,
    /// What to play.
    pub body: Body,
    /// Linear fade applied over the whole sound.
    pub fade: Fade,
    /// Final gain.
    pub gain: f64,
}

impl Recipe {
    /// Single-voice recipe with the default fade.
    pub const fn new(duration: f64, voice: Voice, gain: f64) -> Self {
        Self {
            duration,
            body: Body::Single(voice),
            fade: Fade::DEFAULT,
            gain,
        }
    }

    /// Segmented recipe with the default fade.
    pub const fn segments(duration: f64, voices: &'static [Voice], gain: f64) -> Self {
        Self {
            duration,
            body: Body::Segments(voices),
            fade: Fade::DEFAULT,
            gain,
        }
    }

    /// Overrides the fade.
    pub const fn with_fade(mut self, fade_in: f64, fade_out: f64) -> Self {
        self.fade = Fade::new(fade_in, fade_out);
        self
    }

    /// Number of samples this recipe renders at `sample_rate`.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (sample_rate as f64 * self.duration) as usize
    }

    /// Renders the final sample sequence.
    pub fn render(&self, sample_rate: u32) -> Vec<f64> {
        let total = self.sample_count(sample_rate);
        let mut samples = self.body.render(total, sample_rate as f64);
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = *sample * self.fade.at(i, total) * self.gain;
        }
        samples
    }

    /// Upper bound on the absolute value of any rendered sample.
    pub fn peak_bound(&self) -> f64 {
        let body = self
            .body
            .voices()
            .iter()
            .map(Voice::peak_bound)
            .fold(0.0, f64::max);
        body * self.gain.abs()
    }
}
