//! Voices: partial stacks on top of a pitch source.
//!
//! A [`Voice`] turns `(i, total, t)` into one raw amplitude by evaluating,
//! in order: the pitch, every partial, the mix, an optional shaper, an
//! optional exponential decay and an optional pulse gate.

use serde::Serialize;

use crate::envelope::exp_decay;
use crate::oscillator::{phase, sine, Waveform};
use crate::pitch::Pitch;

/// Where a partial gets its frequency from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialFreq {
    /// Multiple of the voice's base frequency.
    Ratio(f64),
    /// Absolute frequency in Hz, ignoring the base.
    Hz(f64),
}

/// Sine LFO added to a single partial's frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vibrato {
    /// LFO rate in Hz.
    pub rate: f64,
    /// Peak deviation in Hz.
    pub depth: f64,
}

/// One waveform in a voice's stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Partial {
    /// Oscillator shape.
    pub waveform: Waveform,
    /// Frequency source.
    pub freq: PartialFreq,
    /// Mix weight.
    pub weight: f64,
    /// Optional vibrato on this partial only.
    pub vibrato: Option<Vibrato>,
}

impl Partial {
    /// Partial at `ratio` times the base frequency.
    pub const fn ratio(waveform: Waveform, ratio: f64, weight: f64) -> Self {
        Self {
            waveform,
            freq: PartialFreq::Ratio(ratio),
            weight,
            vibrato: None,
        }
    }

    /// Partial at the base frequency with unit weight.
    pub const fn fundamental(waveform: Waveform) -> Self {
        Self::ratio(waveform, 1.0, 1.0)
    }

    /// Partial at a fixed frequency.
    pub const fn hz(waveform: Waveform, hz: f64, weight: f64) -> Self {
        Self {
            waveform,
            freq: PartialFreq::Hz(hz),
            weight,
            vibrato: None,
        }
    }

    /// Adds a vibrato LFO to this partial.
    pub const fn with_vibrato(mut self, rate: f64, depth: f64) -> Self {
        self.vibrato = Some(Vibrato { rate, depth });
        self
    }

    /// Frequency of this partial given the voice's base frequency.
    #[inline]
    pub fn frequency(&self, base: f64, t: f64) -> f64 {
        let freq = match self.freq {
            PartialFreq::Ratio(ratio) => base * ratio,
            PartialFreq::Hz(hz) => hz,
        };
        match self.vibrato {
            Some(v) => freq + sine(v.rate, t) * v.depth,
            None => freq,
        }
    }

    /// Unweighted oscillator output.
    #[inline]
    pub fn sample(&self, base: f64, t: f64) -> f64 {
        self.waveform.sample(self.frequency(base, t), t)
    }
}

/// How partials are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mix {
    /// Weighted sum.
    Sum,
    /// Weighted sum divided by the number of partials, for chords.
    Average,
}

/// Nonlinear waveshaper applied after mixing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shaper {
    /// `tanh(x * drive) * level`.
    SoftClip {
        /// Input gain before the tanh.
        drive: f64,
        /// Output level after the tanh.
        level: f64,
    },
}

impl Shaper {
    /// Applies the shaper to one sample.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            Shaper::SoftClip { drive, level } => (x * drive).tanh() * level,
        }
    }
}

/// Periodic on/off amplitude gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gate {
    /// Gate cycles per second.
    pub rate: f64,
    /// Fraction of each cycle the gate is open.
    pub duty: f64,
}

impl Gate {
    /// 1.0 while open, 0.0 while closed.
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        if phase(self.rate, t) < self.duty {
            1.0
        } else {
            0.0
        }
    }
}

/// A complete voice description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Voice {
    /// Base frequency source.
    pub pitch: Pitch,
    /// Partial stack.
    pub partials: &'static [Partial],
    /// Partial combination.
    pub mix: Mix,
    /// Optional waveshaper.
    pub shaper: Option<Shaper>,
    /// Optional exponential decay rate per second.
    pub decay: Option<f64>,
    /// Optional pulse gate.
    pub gate: Option<Gate>,
}

impl Voice {
    /// Voice summing `partials` over `pitch`.
    pub const fn new(pitch: Pitch, partials: &'static [Partial]) -> Self {
        Self {
            pitch,
            partials,
            mix: Mix::Sum,
            shaper: None,
            decay: None,
            gate: None,
        }
    }

    /// Divides the mix by the partial count.
    pub const fn averaged(mut self) -> Self {
        self.mix = Mix::Average;
        self
    }

    /// Adds a soft clipper after the mix.
    pub const fn soft_clip(mut self, drive: f64, level: f64) -> Self {
        self.shaper = Some(Shaper::SoftClip { drive, level });
        self
    }

    /// Adds an exponential decay `e^(-rate * t)`.
    pub const fn decaying(mut self, rate: f64) -> Self {
        self.decay = Some(rate);
        self
    }

    /// Adds a pulse gate.
    pub const fn gated(mut self, rate: f64, duty: f64) -> Self {
        self.gate = Some(Gate { rate, duty });
        self
    }

    /// Raw amplitude for sample `i` of `total` at time `t`.
    pub fn sample(&self, i: usize, total: usize, t: f64) -> f64 {
        let base = self.pitch.at(i, total, t);

        let mut value = 0.0;
        for partial in self.partials {
            value += partial.sample(base, t) * partial.weight;
        }
        if self.mix == Mix::Average && !self.partials.is_empty() {
            value /= self.partials.len() as f64;
        }

        if let Some(shaper) = &self.shaper {
            value = shaper.apply(value);
        }
        if let Some(rate) = self.decay {
            value *= exp_decay(rate, t);
        }
        if let Some(gate) = &self.gate {
            value *= gate.at(t);
        }

        value
    }

    /// Upper bound on the absolute value [`Voice::sample`] can return.
    pub fn peak_bound(&self) -> f64 {
        let weights: f64 = self.partials.iter().map(|p| p.weight.abs()).sum();
        let mixed = match self.mix {
            Mix::Sum => weights,
            Mix::Average if !self.partials.is_empty() => weights / self.partials.len() as f64,
            Mix::Average => 0.0,
        };
        match self.shaper {
            Some(Shaper::SoftClip { drive, level }) => (mixed * drive.abs()).tanh() * level.abs(),
            None => mixed,
        }
    }

    /// Short description of the synthesis strategy, e.g. `sweep+decay`.
    pub fn strategy(&self) -> String {
        let mut parts = vec![self.pitch.kind()];
        if self.mix == Mix::Average {
            parts.push("chord");
        }
        if self.partials.iter().any(|p| p.vibrato.is_some()) {
            parts.push("vibrato");
        }
        if self.shaper.is_some() {
            parts.push("soft_clip");
        }
        if self.decay.is_some() {
            parts.push("decay");
        }
        if self.gate.is_some() {
            parts.push("gate");
        }
        parts.join("+")
    }
}
