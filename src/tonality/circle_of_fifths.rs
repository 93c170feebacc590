//! Harmonic center of mass on the circle of fifths.

use crate::math::{Real, Vector2};
use crate::tonality::{Note, PitchClass};
use crate::utils::{angle_of, circular_distance};
use arrayvec::ArrayVec;
use ordered_float::OrderedFloat;

/// Octave given to every note picked by [`pick_note`].
pub const PICKED_OCTAVE: u8 = 4;

/// Below this norm, a sum of circle-of-fifths vectors is considered to have no direction.
pub const CANCELLATION_EPSILON: Real = 1.0e-5;

/// Angular distances closer than this are considered tied.
const TIE_EPSILON: Real = 1.0e-5;

/// Sums the unit vectors of each note's pitch class on the circle of fifths.
///
/// The octave of the notes is ignored. The result is the zero vector for an empty input.
pub fn notes_to_vector(notes: &[Note]) -> Vector2<Real> {
    notes
        .iter()
        .map(|note| {
            let angle = note.pitch_class.angle();
            Vector2::new(angle.cos(), angle.sin())
        })
        .sum()
}

/// Picks the unused pitch class closest to the harmonic center of `retained`.
///
/// The target direction is the normalized sum of the circle-of-fifths vectors of the
/// `retained` notes. Among the pitch classes present neither in `retained` nor in `avoid`,
/// the one with the smallest circular angular distance to the target wins. Ties go to the
/// earliest pitch class along [`PitchClass::CIRCLE_OF_FIFTHS`]. The returned note is always
/// at octave [`PICKED_OCTAVE`].
///
/// When the vectors cancel out (including when `retained` is empty), or when every pitch
/// class is already taken, the first pitch class of the circle (C) is returned.
///
/// # Example
///
/// ```
/// use hedrite3d::tonality::{pick_note, Note};
///
/// let c_major: Vec<Note> = ["C4", "E4", "G4"].iter().map(|n| n.parse().unwrap()).collect();
/// assert_eq!(pick_note(&c_major, &[]).to_string(), "D4");
/// ```
pub fn pick_note(retained: &[Note], avoid: &[Note]) -> Note {
    let fallback = Note::new(PitchClass::CIRCLE_OF_FIFTHS[0], PICKED_OCTAVE);

    let sum = notes_to_vector(retained);
    if sum.norm() <= CANCELLATION_EPSILON {
        log::debug!("retained notes cancel out, falling back to {fallback}");
        return fallback;
    }

    let target = angle_of(&sum);

    let is_taken = |pc: PitchClass| {
        retained
            .iter()
            .chain(avoid.iter())
            .any(|note| note.pitch_class == pc)
    };

    let candidates: ArrayVec<(PitchClass, Real), 12> = PitchClass::CIRCLE_OF_FIFTHS
        .iter()
        .copied()
        .filter(|pc| !is_taken(*pc))
        .map(|pc| (pc, circular_distance(pc.angle(), target)))
        .collect();

    let Some(closest) = candidates
        .iter()
        .map(|(_, dist)| OrderedFloat(*dist))
        .min()
    else {
        log::debug!("every pitch class is taken, falling back to {fallback}");
        return fallback;
    };

    // The first candidate within the tie tolerance of the minimum is the earliest one along
    // the circle of fifths.
    candidates
        .iter()
        .find(|(_, dist)| *dist <= closest.0 + TIE_EPSILON)
        .map(|(pc, _)| Note::new(*pc, PICKED_OCTAVE))
        .unwrap_or(fallback)
}
