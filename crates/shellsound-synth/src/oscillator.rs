//! Basic waveform generators.
//!
//! Every oscillator is a pure function of a frequency in Hz and an absolute
//! time in seconds, returning a value in [-1.0, 1.0]. There is no phase
//! accumulator: the phase is recomputed from `freq * t` on every call, so a
//! sample depends only on its own inputs.

use serde::Serialize;

/// 2π, used for sine phase computation.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Sine wave.
#[inline]
pub fn sine(freq: f64, t: f64) -> f64 {
    (TWO_PI * freq * t).sin()
}

/// Square wave derived from the sign of the sine, so it flips exactly where
/// the sine crosses zero. Returns exactly ±1.0.
#[inline]
pub fn square(freq: f64, t: f64) -> f64 {
    if (TWO_PI * freq * t).sin() >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Fractional phase of `freq * t` in [0, 1).
#[inline]
pub fn phase(freq: f64, t: f64) -> f64 {
    (freq * t).rem_euclid(1.0)
}

/// Triangle wave: +1 at phase 0, -1 at phase 0.5.
#[inline]
pub fn triangle(freq: f64, t: f64) -> f64 {
    4.0 * (phase(freq, t) - 0.5).abs() - 1.0
}

/// Rising sawtooth: -1 at phase 0, approaching +1 just before wraparound.
#[inline]
pub fn sawtooth(freq: f64, t: f64) -> f64 {
    2.0 * phase(freq, t) - 1.0
}

/// Primitive waveform selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Square wave (50% duty).
    Square,
    /// Triangle wave.
    Triangle,
    /// Sawtooth wave.
    Sawtooth,
}

impl Waveform {
    /// All waveforms.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];

    /// Evaluates the waveform at `freq` Hz and time `t` seconds.
    #[inline]
    pub fn sample(self, freq: f64, t: f64) -> f64 {
        match self {
            Waveform::Sine => sine(freq, t),
            Waveform::Square => square(freq, t),
            Waveform::Triangle => triangle(freq, t),
            Waveform::Sawtooth => sawtooth(freq, t),
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_sine_quarter_period() {
        assert!(sine(1.0, 0.0).abs() < EPSILON);
        assert!((sine(1.0, 0.25) - 1.0).abs() < EPSILON);
        assert!((sine(1.0, 0.75) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_square_is_exactly_plus_minus_one() {
        for i in 0..1000 {
            let t = i as f64 / 22050.0;
            let v = square(440.0, t);
            assert!(v == 1.0 || v == -1.0);
        }
    }

    #[test]
    fn test_square_changes_sign_at_half_period() {
        let freq = 100.0;
        let half = 1.0 / (2.0 * freq);
        for k in 0..8 {
            let boundary = k as f64 * half;
            let before = square(freq, boundary + half * 0.25);
            let after = square(freq, boundary + half * 0.75);
            // Within a half period the sign is constant.
            assert_eq!(before, after);
            let next = square(freq, boundary + half * 1.25);
            assert_eq!(before, -next);
        }
    }

    #[test]
    fn test_triangle_phase_points() {
        assert!((triangle(1.0, 0.0) - 1.0).abs() < EPSILON);
        assert!((triangle(1.0, 0.25) - 0.0).abs() < EPSILON);
        assert!((triangle(1.0, 0.5) + 1.0).abs() < EPSILON);
        assert!((triangle(1.0, 0.75) - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_sawtooth_phase_points() {
        assert!((sawtooth(1.0, 0.0) + 1.0).abs() < EPSILON);
        assert!((sawtooth(1.0, 0.5) - 0.0).abs() < EPSILON);
        assert!(sawtooth(1.0, 0.999) > 0.99);
        // Wraps back to -1 at the period boundary.
        assert!((sawtooth(2.0, 0.5) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_waveforms_bounded() {
        for waveform in Waveform::ALL {
            for &freq in &[60.0, 333.3, 1200.0, 5000.0] {
                for i in 0..2205 {
                    let t = i as f64 / 22050.0;
                    let v = waveform.sample(freq, t);
                    assert!(
                        (-1.0..=1.0).contains(&v),
                        "{} out of range at {} Hz: {}",
                        waveform.as_str(),
                        freq,
                        v
                    );
                }
            }
        }
    }

    #[test]
    fn test_triangle_and_saw_periodic() {
        let freq = 250.0;
        let period = 1.0 / freq;
        for i in 1..50 {
            let t = i as f64 * 0.000137;
            assert!((triangle(freq, t) - triangle(freq, t + period)).abs() < 1e-6);
            assert!((sawtooth(freq, t) - sawtooth(freq, t + period)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_waveform_dispatch_matches_functions() {
        let (f, t) = (440.0, 0.0123);
        assert_eq!(Waveform::Sine.sample(f, t), sine(f, t));
        assert_eq!(Waveform::Square.sample(f, t), square(f, t));
        assert_eq!(Waveform::Triangle.sample(f, t), triangle(f, t));
        assert_eq!(Waveform::Sawtooth.sample(f, t), sawtooth(f, t));
    }
}
