//! Transformations placing solids relative to each other.

pub use self::attachment::{attach, face_to_face_centroid_distance, FACE_TO_FACE_CENTROID_RATIO};

mod attachment;
