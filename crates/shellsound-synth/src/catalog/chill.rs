//! Chill pack: soft decays, bells and warm chords.

use super::keys::{Category, Intensity, Pack};
use super::CatalogEntry;
use crate::oscillator::Waveform::Sine;
use crate::pitch::Pitch;
use crate::recipe::Recipe;
use crate::voice::{Partial, Voice};

const fn entry(category: Category, intensity: Intensity, description: &'static str, recipe: Recipe) -> CatalogEntry {
    CatalogEntry::new(Pack::Chill, category, intensity, description, recipe)
}

const SINE: &[Partial] = &[Partial::fundamental(Sine)];

pub(super) const ENTRIES: [CatalogEntry; 9] = [
    entry(
        Category::Error,
        Intensity::Light,
        "Gentle low thud",
        Recipe::new(0.3, Voice::new(Pitch::fixed(120.0), SINE).decaying(5.0), 0.5),
    ),
    entry(
        Category::Error,
        Intensity::Medium,
        "Mellow low buzz",
        Recipe::new(
            0.6,
            Voice::new(
                Pitch::sweep(200.0, 120.0),
                &[
                    Partial::ratio(Sine, 1.0, 0.8),
                    Partial::ratio(Sine, 2.0, 0.1),
                ],
            ),
            0.5,
        ),
    ),
    entry(
        Category::Error,
        Intensity::Heavy,
        "Deep bass note with harmonics",
        Recipe::new(
            1.0,
            Voice::new(
                Pitch::fixed(80.0),
                &[
                    Partial::ratio(Sine, 1.0, 0.7),
                    Partial::ratio(Sine, 2.0, 0.2),
                    Partial::ratio(Sine, 3.0, 0.1),
                ],
            ),
            0.5,
        ),
    ),
    entry(
        Category::Warning,
        Intensity::Light,
        "Soft click",
        Recipe::new(0.15, Voice::new(Pitch::fixed(400.0), SINE).decaying(20.0), 0.5),
    ),
    entry(
        Category::Warning,
        Intensity::Medium,
        "Gentle ping",
        Recipe::new(
            0.45,
            Voice::new(
                Pitch::fixed(660.0),
                &[
                    Partial::fundamental(Sine),
                    Partial::hz(Sine, 880.0, 0.3),
                ],
            )
            .decaying(5.0),
            0.5,
        ),
    ),
    entry(
        Category::Warning,
        Intensity::Heavy,
        "Warm minor alert chord",
        Recipe::new(
            0.8,
            Voice::new(
                Pitch::fixed(440.0),
                &[
                    Partial::fundamental(Sine),
                    Partial::hz(Sine, 523.0, 1.0),
                    Partial::hz(Sine, 659.0, 1.0),
                ],
            )
            .averaged()
            .decaying(2.0),
            0.55,
        ),
    ),
    entry(
        Category::Success,
        Intensity::Light,
        "Single gentle ding",
        Recipe::new(0.4, Voice::new(Pitch::fixed(880.0), SINE).decaying(4.0), 0.55),
    ),
    entry(
        Category::Success,
        Intensity::Medium,
        "Double chime",
        Recipe::segments(
            0.6,
            &[
                Voice::new(Pitch::fixed(880.0), SINE).decaying(6.0),
                Voice::new(Pitch::fixed(1100.0), SINE).decaying(6.0),
            ],
            0.55,
        )
        .with_fade(0.01, 0.1),
    ),
    entry(
        Category::Success,
        Intensity::Heavy,
        "Warm major harmony",
        Recipe::new(
            1.0,
            Voice::new(
                Pitch::fixed(523.0),
                &[
                    Partial::fundamental(Sine),
                    Partial::hz(Sine, 659.0, 1.0),
                    Partial::hz(Sine, 784.0, 1.0),
                ],
            )
            .averaged()
            .decaying(1.5),
            0.55,
        ),
    ),
];
