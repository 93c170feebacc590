//! Shapes supported by hedrite.

pub use self::face::{FaceIndex, FaceIndexError, FaceMask, FACE_TABLE};
pub use self::solid::Solid;
pub use self::triangle::Triangle;

mod face;
mod solid;
mod triangle;
