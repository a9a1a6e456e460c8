//! Shellsound synthesis
//!
//! This crate synthesizes the Better Shell notification sounds: three packs
//! (meme, chill, retro), each with error, warning and success sounds at
//! light, medium and heavy intensity, for 27 sounds in total.
//!
//! # Overview
//!
//! Every sound is built from four primitive waveforms (sine, square,
//! triangle, sawtooth) and a handful of composable building blocks:
//!
//! - **Pitch sources** - fixed, linear sweep, wobble, step sequence,
//!   two-tone alternation, midpoint split
//! - **Partials** - harmonics or fixed tones with weights and optional vibrato
//! - **Mixing** - weighted sum or chord averaging
//! - **Shaping** - tanh soft clip, exponential decay, pulse gate
//! - **Envelopes** - a linear fade over the whole sound
//!
//! # Determinism
//!
//! Rendering is a pure function of the catalog constants. There is no
//! randomness and no timestamp in the output, so regenerating the catalog
//! produces byte-identical WAV files.
//!
//! # Example
//!
//! ```no_run
//! use shellsound_synth::{write_sound, Catalog};
//! use std::path::Path;
//!
//! for entry in Catalog::builtin() {
//!     let written = write_sound(Path::new("sounds"), entry)?;
//!     println!("wrote {}", written.path.display());
//! }
//! # Ok::<(), shellsound_synth::SoundError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`oscillator`] - Primitive waveforms
//! - [`envelope`] - Fade and decay envelopes
//! - [`pitch`] - Base-frequency sources
//! - [`voice`] - Partial stacks, mixing and shaping
//! - [`recipe`] - Duration, body, fade and gain
//! - [`catalog`] - The 27 built-in sounds
//! - [`generate`] - Render and write pipeline
//! - [`verify`] - Comparing files on disk with a fresh render
//! - [`wav`] - Deterministic WAV file writer

pub mod catalog;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod oscillator;
pub mod pitch;
pub mod recipe;
pub mod verify;
pub mod voice;
pub mod wav;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 22050;
/// Output channel count.
pub const CHANNELS: u16 = 1;
/// Output bits per sample.
pub const BITS_PER_SAMPLE: u16 = 16;
/// Full-scale 16-bit amplitude.
pub const MAX_AMPLITUDE: f64 = 32767.0;

// Re-export main types at crate root
pub use catalog::{Catalog, CatalogEntry, CatalogFilter, Category, Intensity, Pack, SoundKey};
pub use error::{SoundError, SoundResult};
pub use generate::{render, write_sound, RenderedSound, SoundStats, WrittenSound};
pub use recipe::Recipe;
pub use verify::{verify_sound, FileStatus, VerifiedSound};
pub use wav::{WavFormat, WavResult};
