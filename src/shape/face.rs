//! Faces of a tetrahedral solid and their fixed vertex table.

use core::fmt;

/// The vertex indices of each face of a [`Solid`](crate::shape::Solid).
///
/// Face `i` is the face opposite to the vertex `i`. Every face is wound so that the
/// right-handed normal `(b - a) × (c - a)` points away from the solid.
///
/// ```text
///     b
///   /   \     d is behind
///  a --- c
/// ```
pub const FACE_TABLE: [[u32; 3]; 4] = [[2, 1, 3], [3, 0, 2], [1, 0, 3], [2, 0, 1]];

/// Error returned when a face index cannot be recovered or built.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FaceIndexError {
    /// The ordinal does not belong to the 12-entry duplicated vertex buffer.
    #[error("the buffer vertex ordinal {ordinal} maps to the face {face}, which is out of bounds (must be < 4)")]
    OutOfRange {
        /// The buffer vertex ordinal that was given.
        ordinal: u32,
        /// The face it would have mapped to.
        face: u32,
    },
    /// A raw face index is not in `0..4`.
    #[error("the face index {0} is out of bounds (must be < 4)")]
    InvalidIndex(u32),
}

/// The index of a face of a tetrahedral solid, always in `0..4`.
///
/// The face `i` excludes the vertex `i`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FaceIndex(u8);

impl FaceIndex {
    /// The face opposite to the vertex A.
    pub const A: FaceIndex = FaceIndex(0);
    /// The face opposite to the vertex B.
    pub const B: FaceIndex = FaceIndex(1);
    /// The face opposite to the vertex C.
    pub const C: FaceIndex = FaceIndex(2);
    /// The face opposite to the vertex D.
    pub const D: FaceIndex = FaceIndex(3);

    /// All four faces, in index order.
    pub const ALL: [FaceIndex; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// The face index as an `usize`.
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// The face index shifted by `offset` modulo 4.
    ///
    /// `face.offset(1)` and `face.offset(2)` are two of the vertices of this face.
    #[inline]
    pub fn offset(self, offset: u8) -> FaceIndex {
        FaceIndex((self.0 + offset % 4) % 4)
    }

    /// The three vertex indices making up this face, in winding order.
    #[inline]
    pub fn vertex_ids(self) -> [u32; 3] {
        FACE_TABLE[self.get()]
    }

    /// The face mask bit of this face.
    #[inline]
    pub fn mask(self) -> FaceMask {
        FaceMask::from_bits_truncate(1 << self.0)
    }
}

impl TryFrom<u32> for FaceIndex {
    type Error = FaceIndexError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < 4 {
            Ok(FaceIndex(value as u8))
        } else {
            Err(FaceIndexError::InvalidIndex(value))
        }
    }
}

impl fmt::Display for FaceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = ['A', 'B', 'C', 'D'][self.get()];
        write!(f, "face {label}")
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// A set of faces of a tetrahedral solid.
pub struct FaceMask(u8);

bitflags::bitflags! {
    /// Flags identifying the faces of a tetrahedral solid.
    impl FaceMask: u8 {
        /// The face opposite to the vertex A.
        const A = 1 << 0;
        /// The face opposite to the vertex B.
        const B = 1 << 1;
        /// The face opposite to the vertex C.
        const C = 1 << 2;
        /// The face opposite to the vertex D.
        const D = 1 << 3;
    }
}
