//! Retro pack: 8-bit square and triangle bleeps.

use super::keys::{Category, Intensity, Pack};
use super::CatalogEntry;
use crate::oscillator::Waveform::{Sawtooth, Square, Triangle};
use crate::pitch::Pitch;
use crate::recipe::Recipe;
use crate::voice::{Partial, Voice};

const fn entry(category: Category, intensity: Intensity, description: &'static str, recipe: Recipe) -> CatalogEntry {
    CatalogEntry::new(Pack::Retro, category, intensity, description, recipe)
}

// square 0.7 + triangle 0.3, shared by the level-up scale and the alarm
const SQUARE_TRIANGLE: &[Partial] = &[
    Partial::ratio(Square, 1.0, 0.7),
    Partial::ratio(Triangle, 1.0, 0.3),
];

pub(super) const ENTRIES: [CatalogEntry; 9] = [
    entry(
        Category::Error,
        Intensity::Light,
        "Quick square blip down",
        Recipe::new(
            0.2,
            Voice::new(Pitch::sweep(400.0, 150.0), &[Partial::fundamental(Square)]),
            0.5,
        ),
    ),
    entry(
        Category::Error,
        Intensity::Medium,
        "Descending game-over scale",
        Recipe::new(
            0.6,
            Voice::new(
                Pitch::steps(&[400.0, 350.0, 300.0, 250.0, 200.0]),
                &[
                    Partial::ratio(Square, 1.0, 0.7),
                    Partial::ratio(Triangle, 0.5, 0.3),
                ],
            ),
            0.5,
        ),
    ),
    entry(
        Category::Error,
        Intensity::Heavy,
        "Multi-tone crash sequence",
        Recipe::new(
            1.0,
            Voice::new(
                Pitch::steps(&[500.0, 400.0, 300.0, 200.0, 150.0, 100.0]),
                &[
                    Partial::ratio(Square, 1.0, 0.6),
                    Partial::ratio(Sawtooth, 2.0, 0.2),
                ],
            ),
            0.5,
        ),
    ),
    entry(
        Category::Warning,
        Intensity::Light,
        "Triangle alert pip",
        Recipe::new(
            0.2,
            Voice::new(Pitch::fixed(600.0), &[Partial::fundamental(Triangle)]),
            0.5,
        ),
    ),
    entry(
        Category::Warning,
        Intensity::Medium,
        "Pulsing warning beep",
        Recipe::new(
            0.5,
            Voice::new(Pitch::fixed(500.0), &[Partial::fundamental(Triangle)]).gated(5.0, 0.5),
            0.5,
        ),
    ),
    entry(
        Category::Warning,
        Intensity::Heavy,
        "Alternating alarm",
        Recipe::new(
            1.0,
            Voice::new(Pitch::alternate(4.0, 700.0, 400.0), SQUARE_TRIANGLE),
            0.5,
        ),
    ),
    entry(
        Category::Success,
        Intensity::Light,
        "Coin pickup",
        Recipe::new(
            0.15,
            Voice::new(Pitch::halves(800.0, 1200.0), &[Partial::fundamental(Square)]),
            0.5,
        ),
    ),
    entry(
        Category::Success,
        Intensity::Medium,
        "Level-up scale",
        Recipe::new(
            0.5,
            Voice::new(
                Pitch::steps(&[400.0, 500.0, 600.0, 700.0, 800.0, 1000.0]),
                SQUARE_TRIANGLE,
            ),
            0.5,
        ),
    ),
    entry(
        Category::Success,
        Intensity::Heavy,
        "Victory jingle",
        Recipe::new(
            1.2,
            Voice::new(
                Pitch::steps(&[400.0, 500.0, 600.0, 500.0, 700.0, 800.0, 1000.0, 1200.0]),
                &[
                    Partial::fundamental(Square),
                    Partial::ratio(Triangle, 1.5, 1.0),
                ],
            )
            .averaged(),
            0.5,
        ),
    ),
];
