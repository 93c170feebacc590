//! Pitch classes, notes and their frequencies.

use crate::math::Real;
use core::fmt;
use core::str::FromStr;
use na::RealField;

/// Error raised when parsing a pitch class or a note from a string.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ParsePitchError {
    /// The input string is empty.
    #[error("empty pitch string")]
    Empty,
    /// The pitch class part is not one of `A` to `G`, optionally followed by `#` or `b`.
    #[error("unknown pitch class: {0:?}")]
    UnknownPitchClass(String),
    /// The octave part is missing or is not a single digit.
    #[error("invalid octave in pitch string: {0:?}")]
    InvalidOctave(String),
}

/// One of the twelve pitch classes of the chromatic scale, spelled with sharps.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum PitchClass {
    /// C
    C,
    /// C♯ / D♭
    CSharp,
    /// D
    D,
    /// D♯ / E♭
    DSharp,
    /// E
    E,
    /// F
    F,
    /// F♯ / G♭
    FSharp,
    /// G
    G,
    /// G♯ / A♭
    GSharp,
    /// A
    A,
    /// A♯ / B♭
    ASharp,
    /// B
    B,
}

impl PitchClass {
    /// The pitch classes in chromatic order, starting from C.
    pub const CHROMATIC: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// The pitch classes along the circle of fifths, starting from C.
    pub const CIRCLE_OF_FIFTHS: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::G,
        PitchClass::D,
        PitchClass::A,
        PitchClass::E,
        PitchClass::B,
        PitchClass::FSharp,
        PitchClass::CSharp,
        PitchClass::GSharp,
        PitchClass::DSharp,
        PitchClass::ASharp,
        PitchClass::F,
    ];

    /// Number of semitones above C, in `0..12`.
    #[inline]
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// The pitch class `semitone` semitones above C (taken modulo 12).
    #[inline]
    pub fn from_semitone(semitone: u8) -> PitchClass {
        Self::CHROMATIC[(semitone % 12) as usize]
    }

    /// Position of this pitch class along [`Self::CIRCLE_OF_FIFTHS`].
    #[inline]
    pub fn circle_of_fifths_index(self) -> usize {
        // Stepping by a fifth is 7 semitones, and 7 is its own inverse modulo 12.
        (self.semitone() as usize * 7) % 12
    }

    /// The angle of this pitch class on the circle of fifths: `2π · index / 12`.
    #[inline]
    pub fn angle(self) -> Real {
        Real::two_pi() * self.circle_of_fifths_index() as Real / 12.0
    }

    /// The name of this pitch class, spelled with a sharp if needed.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl PitchClass {
    /// Parses a pitch class name, also returning the octave carry of its accidental.
    ///
    /// `Cb` is a B of the octave below (carry `-1`) and `B#` a C of the octave above
    /// (carry `1`).
    fn parse_with_carry(s: &str) -> Result<(PitchClass, i8), ParsePitchError> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParsePitchError::Empty)?;

        let natural: i8 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(ParsePitchError::UnknownPitchClass(s.to_string())),
        };

        let semitone = match chars.as_str() {
            "" => natural,
            "#" => natural + 1,
            "b" => natural - 1,
            _ => return Err(ParsePitchError::UnknownPitchClass(s.to_string())),
        };

        let carry = semitone.div_euclid(12);
        Ok((
            PitchClass::from_semitone(semitone.rem_euclid(12) as u8),
            carry,
        ))
    }
}

impl FromStr for PitchClass {
    type Err = ParsePitchError;

    /// Parses `C`, `C#` or `Db`-style names. Flats are folded into their sharp enharmonic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::parse_with_carry(s).map(|(pitch_class, _)| pitch_class)
    }
}

/// A pitch class at a given octave, e.g. `C#4`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Note {
    /// The pitch class of this note.
    pub pitch_class: PitchClass,
    /// The octave of this note, in scientific pitch notation (C4 is middle C).
    pub octave: u8,
}

impl Note {
    /// The highest octave a note can be written with.
    pub const MAX_OCTAVE: u8 = 9;

    /// Creates a new note.
    ///
    /// # Panics
    ///
    /// Panics if `octave` exceeds [`Self::MAX_OCTAVE`].
    #[inline]
    pub fn new(pitch_class: PitchClass, octave: u8) -> Note {
        assert!(
            octave <= Self::MAX_OCTAVE,
            "Note octave out of bounds (must be <= {}).",
            Self::MAX_OCTAVE
        );
        Note {
            pitch_class,
            octave,
        }
    }

    /// The MIDI number of this note: C4 is 60, A4 is 69.
    #[inline]
    pub fn midi_number(&self) -> u8 {
        (self.octave + 1) * 12 + self.pitch_class.semitone()
    }

    /// The frequency of this note in Hz, in twelve-tone equal temperament with A4 = 440 Hz.
    #[inline]
    pub fn frequency(&self) -> Real {
        midi_to_frequency(self.midi_number())
    }

    /// This note moved by `delta` octaves, or `None` if the result is not a writable octave.
    pub fn octave_shifted(&self, delta: i8) -> Option<Note> {
        let octave = self.octave.checked_add_signed(delta)?;
        (octave <= Self::MAX_OCTAVE).then_some(Note {
            pitch_class: self.pitch_class,
            octave,
        })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for Note {
    type Err = ParsePitchError;

    /// Parses notes like `A4`, `C#3` or `Bb5`. The octave is a single digit.
    ///
    /// The written octave is the one of the letter: `Cb4` is B3 and `B#4` is C5.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let octave_start = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or(ParsePitchError::Empty)?;
        let (name, octave) = s.split_at(octave_start);

        let octave = octave
            .parse::<u8>()
            .map_err(|_| ParsePitchError::InvalidOctave(s.to_string()))?;

        if name.is_empty() {
            return Err(ParsePitchError::InvalidOctave(s.to_string()));
        }

        let (pitch_class, carry) = PitchClass::parse_with_carry(name)?;
        let octave = octave
            .checked_add_signed(carry)
            .filter(|octave| *octave <= Note::MAX_OCTAVE)
            .ok_or_else(|| ParsePitchError::InvalidOctave(s.to_string()))?;

        Ok(Note::new(pitch_class, octave))
    }
}

/// The frequency in Hz of the given MIDI note number (A4 = 69 = 440 Hz).
#[inline]
pub fn midi_to_frequency(midi_number: u8) -> Real {
    const A4_FREQUENCY: Real = 440.0;
    const A4_MIDI: Real = 69.0;

    A4_FREQUENCY * (2.0 as Real).powf((midi_number as Real - A4_MIDI) / 12.0)
}
