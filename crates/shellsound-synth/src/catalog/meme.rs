//! Meme pack: dramatic, over-the-top sweeps and wobbles.

use super::keys::{Category, Intensity, Pack};
use super::CatalogEntry;
use crate::oscillator::Waveform::{Sine, Square};
use crate::pitch::Pitch;
use crate::recipe::Recipe;
use crate::voice::{Partial, Voice};

const fn entry(category: Category, intensity: Intensity, description: &'static str, recipe: Recipe) -> CatalogEntry {
    CatalogEntry::new(Pack::Meme, category, intensity, description, recipe)
}

pub(super) const ENTRIES: [CatalogEntry; 9] = [
    entry(
        Category::Error,
        Intensity::Light,
        "Short descending buzz",
        Recipe::new(
            0.3,
            Voice::new(
                Pitch::sweep(450.0, 180.0),
                &[
                    Partial::ratio(Sine, 1.0, 0.8),
                    Partial::ratio(Sine, 2.0, 0.2),
                ],
            ),
            0.7,
        ),
    ),
    entry(
        Category::Error,
        Intensity::Medium,
        "Longer descending tone with wobble",
        Recipe::new(
            0.7,
            Voice::new(
                Pitch::sweep(500.0, 120.0),
                &[
                    Partial::ratio(Sine, 1.0, 0.7).with_vibrato(8.0, 20.0),
                    Partial::ratio(Square, 0.5, 0.3),
                ],
            ),
            0.65,
        ),
    ),
    entry(
        Category::Error,
        Intensity::Heavy,
        "Dramatic long descent with overdrive",
        Recipe::new(
            1.2,
            Voice::new(
                Pitch::sweep(600.0, 60.0),
                &[
                    Partial::ratio(Sine, 1.0, 0.6),
                    Partial::ratio(Sine, 1.5, 0.3),
                    Partial::ratio(Sine, 0.5, 0.4),
                ],
            )
            .soft_clip(2.0, 0.5),
            0.7,
        ),
    ),
    entry(
        Category::Warning,
        Intensity::Light,
        "Quick wobble",
        Recipe::new(
            0.25,
            Voice::new(
                Pitch::wobble(600.0, 15.0, 100.0),
                &[Partial::fundamental(Sine)],
            ),
            0.6,
        ),
    ),
    entry(
        Category::Warning,
        Intensity::Medium,
        "Sustained wobble alarm",
        Recipe::new(
            0.6,
            Voice::new(
                Pitch::wobble(550.0, 10.0, 150.0),
                &[
                    Partial::ratio(Sine, 1.0, 0.8),
                    Partial::ratio(Square, 0.5, 0.2),
                ],
            ),
            0.65,
        ),
    ),
    entry(
        Category::Warning,
        Intensity::Heavy,
        "Urgent two-tone alarm",
        Recipe::new(
            1.1,
            Voice::new(
                Pitch::alternate(3.0, 700.0, 500.0),
                &[
                    Partial::ratio(Sine, 1.0, 0.8),
                    Partial::ratio(Square, 1.0, 0.2),
                ],
            ),
            0.65,
        ),
    ),
    entry(
        Category::Success,
        Intensity::Light,
        "Quick ascending blip",
        Recipe::new(
            0.2,
            Voice::new(Pitch::sweep(500.0, 900.0), &[Partial::fundamental(Sine)]),
            0.6,
        ),
    ),
    entry(
        Category::Success,
        Intensity::Medium,
        "Triumphant ascending rise",
        Recipe::new(
            0.5,
            Voice::new(
                Pitch::sweep(400.0, 1000.0),
                &[
                    Partial::ratio(Sine, 1.0, 0.7),
                    Partial::ratio(Sine, 1.25, 0.3),
                ],
            ),
            0.65,
        ),
    ),
    entry(
        Category::Success,
        Intensity::Heavy,
        "Ascending major-chord fanfare",
        Recipe::new(
            1.0,
            Voice::new(
                Pitch::sweep(300.0, 900.0),
                &[
                    Partial::fundamental(Sine),
                    Partial::ratio(Sine, 1.25, 1.0),
                    Partial::ratio(Sine, 1.5, 1.0),
                ],
            )
            .averaged(),
            0.7,
        ),
    ),
];
