//! Base-frequency sources.
//!
//! A [`Pitch`] decides the fundamental frequency for each sample from the
//! sample index, the total sample count and the time in seconds. Partials
//! then derive their own frequencies from this base.

use serde::Serialize;

use crate::oscillator::{phase, sine};

/// Linear interpolation from `freq_start` to `freq_end` across `[0, total)`.
///
/// An empty range yields `freq_start`.
pub fn freq_sweep(freq_start: f64, freq_end: f64, i: usize, total: usize) -> f64 {
    let t = if total > 0 {
        i as f64 / total as f64
    } else {
        0.0
    };
    freq_start + (freq_end - freq_start) * t
}

/// Index of the step that sample `i` of `total` falls into, for a sequence
/// of `steps` equal-length steps. Clamped to the last step.
pub fn step_index(i: usize, total: usize, steps: usize) -> usize {
    if total == 0 || steps == 0 {
        return 0;
    }
    let step = (i as f64 / total as f64 * steps as f64) as usize;
    step.min(steps - 1)
}

/// How the fundamental frequency evolves over a sound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pitch {
    /// Constant frequency.
    Fixed {
        /// Frequency in Hz.
        hz: f64,
    },
    /// Linear sweep from `start` to `end` over the sound's length.
    Sweep {
        /// Frequency at the first sample.
        start: f64,
        /// Frequency approached at the last sample.
        end: f64,
    },
    /// Carrier frequency modulated by a slow sine.
    Wobble {
        /// Centre frequency in Hz.
        center: f64,
        /// Modulator rate in Hz.
        rate: f64,
        /// Peak deviation in Hz.
        depth: f64,
    },
    /// Piecewise-constant note sequence, one equal-length step per note.
    Steps {
        /// Notes in playback order.
        notes: &'static [f64],
    },
    /// Two tones alternating `rate` times per second, half a cycle each.
    Alternate {
        /// Alternation cycles per second.
        rate: f64,
        /// Frequency during the first half of each cycle.
        first: f64,
        /// Frequency during the second half of each cycle.
        second: f64,
    },
    /// First tone for the first `total / 2` samples, second tone after.
    Halves {
        /// Frequency of the first half.
        first: f64,
        /// Frequency of the second half.
        second: f64,
    },
}

impl Pitch {
    /// Constant frequency.
    pub const fn fixed(hz: f64) -> Self {
        Pitch::Fixed { hz }
    }

    /// Linear sweep.
    pub const fn sweep(start: f64, end: f64) -> Self {
        Pitch::Sweep { start, end }
    }

    /// Sine-modulated carrier.
    pub const fn wobble(center: f64, rate: f64, depth: f64) -> Self {
        Pitch::Wobble {
            center,
            rate,
            depth,
        }
    }

    /// Step sequence.
    pub const fn steps(notes: &'static [f64]) -> Self {
        Pitch::Steps { notes }
    }

    /// Two-tone alternation.
    pub const fn alternate(rate: f64, first: f64, second: f64) -> Self {
        Pitch::Alternate {
            rate,
            first,
            second,
        }
    }

    /// Two-tone split at the midpoint.
    pub const fn halves(first: f64, second: f64) -> Self {
        Pitch::Halves { first, second }
    }

    /// Fundamental frequency for sample `i` of `total` at time `t`.
    pub fn at(&self, i: usize, total: usize, t: f64) -> f64 {
        match *self {
            Pitch::Fixed { hz } => hz,
            Pitch::Sweep { start, end } => freq_sweep(start, end, i, total),
            Pitch::Wobble {
                center,
                rate,
                depth,
            } => center + sine(rate, t) * depth,
            Pitch::Steps { notes } => match notes.len() {
                0 => 0.0,
                n => notes[step_index(i, total, n)],
            },
            Pitch::Alternate {
                rate,
                first,
                second,
            } => {
                if phase(rate, t) < 0.5 {
                    first
                } else {
                    second
                }
            }
            Pitch::Halves { first, second } => {
                if i < total / 2 {
                    first
                } else {
                    second
                }
            }
        }
    }

    /// Short label for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Pitch::Fixed { .. } => "fixed",
            Pitch::Sweep { .. } => "sweep",
            Pitch::Wobble { .. } => "wobble",
            Pitch::Steps { .. } => "steps",
            Pitch::Alternate { .. } => "alternate",
            Pitch::Halves { .. } => "halves",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freq_sweep_endpoints() {
        assert_eq!(freq_sweep(500.0, 900.0, 0, 4410), 500.0);
        assert_eq!(freq_sweep(500.0, 900.0, 2205, 4410), 700.0);
        let last = freq_sweep(500.0, 900.0, 4409, 4410);
        assert!(last < 900.0 && last > 899.9);
    }

    #[test]
    fn test_freq_sweep_descending() {
        let mid = freq_sweep(450.0, 180.0, 50, 100);
        assert_eq!(mid, 315.0);
    }

    #[test]
    fn test_freq_sweep_empty_range() {
        assert_eq!(freq_sweep(400.0, 150.0, 0, 0), 400.0);
        assert_eq!(freq_sweep(400.0, 150.0, 7, 0), 400.0);
    }

    #[test]
    fn test_step_index_clamps() {
        assert_eq!(step_index(0, 100, 5), 0);
        assert_eq!(step_index(19, 100, 5), 0);
        assert_eq!(step_index(20, 100, 5), 1);
        assert_eq!(step_index(99, 100, 5), 4);
        // Out-of-range index clamps to the last step.
        assert_eq!(step_index(150, 100, 5), 4);
        assert_eq!(step_index(3, 0, 5), 0);
        assert_eq!(step_index(3, 10, 0), 0);
    }

    #[test]
    fn test_steps_piecewise_constant() {
        const NOTES: &[f64] = &[400.0, 350.0, 300.0, 250.0, 200.0];
        let pitch = Pitch::steps(NOTES);
        let total = 13230;
        let per_step = total / NOTES.len();
        for (n, &note) in NOTES.iter().enumerate() {
            let i = n * per_step + per_step / 2;
            assert_eq!(pitch.at(i, total, i as f64 / 22050.0), note);
        }
    }

    #[test]
    fn test_wobble_stays_within_depth() {
        let pitch = Pitch::wobble(600.0, 15.0, 100.0);
        for i in 0..5512 {
            let t = i as f64 / 22050.0;
            let f = pitch.at(i, 5512, t);
            assert!((500.0..=700.0).contains(&f));
        }
        assert_eq!(pitch.at(0, 5512, 0.0), 600.0);
    }

    #[test]
    fn test_alternate_switches_each_half_cycle() {
        let pitch = Pitch::alternate(4.0, 700.0, 400.0);
        assert_eq!(pitch.at(0, 0, 0.0), 700.0);
        assert_eq!(pitch.at(0, 0, 0.1), 700.0);
        assert_eq!(pitch.at(0, 0, 0.15), 400.0);
        assert_eq!(pitch.at(0, 0, 0.3), 700.0);
    }

    #[test]
    fn test_halves_split_uses_integer_midpoint() {
        let pitch = Pitch::halves(800.0, 1200.0);
        let total = 3307;
        assert_eq!(pitch.at(1652, total, 0.0), 800.0);
        assert_eq!(pitch.at(1653, total, 0.0), 1200.0);
    }
}
