//! Notes, pitch classes and the circle-of-fifths heuristics used to pick new notes.

pub use self::circle_of_fifths::{
    notes_to_vector, pick_note, CANCELLATION_EPSILON, PICKED_OCTAVE,
};
pub use self::color::{notes_to_color, Hsl};
pub use self::pitch::{midi_to_frequency, Note, ParsePitchError, PitchClass};

mod circle_of_fifths;
mod color;
mod pitch;
