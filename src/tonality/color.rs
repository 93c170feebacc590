//! Colors derived from the harmonic content of a chord.

use crate::math::{Real, Vector2};
use crate::tonality::{notes_to_vector, Note};
use crate::utils::angle_of;
use core::fmt;
use na::RealField;

/// A color in the hue-saturation-lightness space.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    /// The hue, in degrees, in `[0, 360)`.
    pub hue: Real,
    /// The saturation, in percent.
    pub saturation: Real,
    /// The lightness, in percent.
    pub lightness: Real,
}

impl Hsl {
    /// Minimum saturation given to a chord color, so that even balanced chords stay visible.
    pub const MIN_SATURATION: Real = 20.0;
    /// Lightness of every chord color.
    pub const LIGHTNESS: Real = 50.0;

    /// Maps a circle-of-fifths vector to a color.
    ///
    /// The vector angle gives the hue and its norm the saturation (`|v| * 100`, clamped to
    /// `[20, 100]`).
    pub fn from_vector(v: &Vector2<Real>) -> Hsl {
        let hue = angle_of(v) / Real::two_pi() * 360.0;
        let saturation = (v.norm() * 100.0).clamp(Self::MIN_SATURATION, 100.0);

        Hsl {
            // `angle_of` can round up to exactly 2π.
            hue: if hue >= 360.0 { 0.0 } else { hue },
            saturation,
            lightness: Self::LIGHTNESS,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.0}, {:.0}%, {:.0}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// The color of a set of notes: see [`Hsl::from_vector`] and [`notes_to_vector`].
pub fn notes_to_color(notes: &[Note]) -> Hsl {
    Hsl::from_vector(&notes_to_vector(notes))
}
