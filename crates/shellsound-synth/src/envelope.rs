//! Amplitude envelopes.
//!
//! Two shapes are used by the catalog: a linear fade (ramp in, hold, ramp
//! out) applied to every recipe as a whole, and an exponential decay that
//! voices multiply in to imitate struck or plucked tones.

use serde::Serialize;

/// Default fade-in length as a fraction of the sound.
pub const DEFAULT_FADE_IN: f64 = 0.05;
/// Default fade-out length as a fraction of the sound.
pub const DEFAULT_FADE_OUT: f64 = 0.2;

/// Linear fade envelope parameters, as fractions of the total length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fade {
    /// Fraction of the sound spent ramping up from silence.
    pub fade_in: f64,
    /// Fraction of the sound spent ramping down to silence.
    pub fade_out: f64,
}

impl Default for Fade {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Fade {
    /// The fade every recipe uses unless it overrides it.
    pub const DEFAULT: Fade = Fade {
        fade_in: DEFAULT_FADE_IN,
        fade_out: DEFAULT_FADE_OUT,
    };

    /// Creates fade parameters.
    pub const fn new(fade_in: f64, fade_out: f64) -> Self {
        Self { fade_in, fade_out }
    }

    /// Envelope value for sample `i` of `total`.
    #[inline]
    pub fn at(&self, i: usize, total: usize) -> f64 {
        fade_envelope(i, total, self.fade_in, self.fade_out)
    }
}

/// Linear fade multiplier in [0, 1] for sample `i` of `total`.
///
/// The first `floor(fade_in * total)` samples ramp up as `i / len`, the last
/// `floor(fade_out * total)` samples ramp down as `(total - i) / len`, and
/// everything between holds at 1.0. A window that rounds to zero samples is
/// treated as absent.
pub fn fade_envelope(i: usize, total: usize, fade_in: f64, fade_out: f64) -> f64 {
    let fade_in_len = (fade_in * total as f64) as usize;
    let fade_out_len = (fade_out * total as f64) as usize;

    if i < fade_in_len {
        i as f64 / fade_in_len as f64
    } else if i >= total.saturating_sub(fade_out_len) {
        if fade_out_len == 0 {
            return 1.0;
        }
        let remaining = total.saturating_sub(i);
        remaining as f64 / fade_out_len as f64
    } else {
        1.0
    }
}

/// Exponential decay `e^(-rate * t)` for time `t` in seconds.
#[inline]
pub fn exp_decay(rate: f64, t: f64) -> f64 {
    (-rate * t).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_starts_at_zero() {
        assert_eq!(fade_envelope(0, 4410, 0.05, 0.2), 0.0);
    }

    #[test]
    fn test_fade_in_ramp() {
        // 5% of 4410 = 220 samples
        assert_eq!(fade_envelope(110, 4410, 0.05, 0.2), 0.5);
        assert!(fade_envelope(219, 4410, 0.05, 0.2) < 1.0);
        assert_eq!(fade_envelope(220, 4410, 0.05, 0.2), 1.0);
    }

    #[test]
    fn test_fade_hold_region() {
        for i in 220..(4410 - 882) {
            assert_eq!(fade_envelope(i, 4410, 0.05, 0.2), 1.0);
        }
    }

    #[test]
    fn test_fade_out_ramp() {
        // 20% of 4410 = 882 samples; ramp starts at 3528
        let total = 4410;
        assert_eq!(fade_envelope(3528, total, 0.05, 0.2), 1.0);
        assert!(fade_envelope(3529, total, 0.05, 0.2) < 1.0);
        let last = fade_envelope(total - 1, total, 0.05, 0.2);
        assert!((last - 1.0 / 882.0).abs() < 1e-12);
        assert!(last > 0.0);
    }

    #[test]
    fn test_fade_monotonic_ramps() {
        let total = 13230;
        let mut prev = -1.0;
        for i in 0..(total / 2) {
            let v = fade_envelope(i, total, 0.01, 0.1);
            assert!(v >= prev);
            prev = v;
        }
        for i in (total / 2)..total {
            let v = fade_envelope(i, total, 0.01, 0.1);
            assert!(v <= prev);
            prev = v;
        }
    }

    #[test]
    fn test_zero_length_windows_hold_at_one() {
        assert_eq!(fade_envelope(0, 100, 0.0, 0.0), 1.0);
        assert_eq!(fade_envelope(99, 100, 0.0, 0.0), 1.0);
        // 0.005 * 100 rounds down to zero samples
        assert_eq!(fade_envelope(0, 100, 0.005, 0.005), 1.0);
        assert_eq!(fade_envelope(99, 100, 0.005, 0.005), 1.0);
    }

    #[test]
    fn test_empty_sound() {
        assert_eq!(fade_envelope(0, 0, 0.05, 0.2), 1.0);
    }

    #[test]
    fn test_fade_bounded() {
        let fade = Fade::default();
        for total in [1usize, 2, 7, 100, 3307] {
            for i in 0..total {
                let v = fade.at(i, total);
                assert!((0.0..=1.0).contains(&v), "total={} i={} v={}", total, i, v);
            }
        }
    }

    #[test]
    fn test_exp_decay() {
        assert_eq!(exp_decay(5.0, 0.0), 1.0);
        assert!((exp_decay(1.0, 1.0) - (-1.0f64).exp()).abs() < 1e-15);
        assert!(exp_decay(20.0, 0.15) < 0.05);
    }
}
