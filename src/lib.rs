/*!
hedrite
=======

**hedrite** grows an interactive lattice of regular tetrahedra. Every cell of
the lattice carries a four-note chord; clicking one of its faces attaches a new
cell flush against that face, carrying three of the parent's notes over and
picking a fresh fourth note from the harmonic center of the other three.

The crate contains the geometric and tonal core of that system:

- [`shape`]: the regular tetrahedral [`Solid`](shape::Solid) and its fixed face table.
- [`transformation`]: the face-to-face [`attach`](transformation::attach) operation.
- [`query`]: ray casting against solids.
- [`tonality`]: pitch parsing and the circle-of-fifths note picker.
- [`interaction`]: the pointer-driven hover/click dispatcher.
- [`lattice`]: cells and the top-level [`Lattice`](lattice::Lattice).

Rendering, audio playback and camera control are left to the caller. They are
reached through the collaborator traits of [`interaction`] and [`debug`].
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");
#[cfg(not(any(feature = "f32", feature = "f64")))]
std::compile_error!("Either the `f32` or the `f64` feature must be enabled.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod debug;
pub mod interaction;
pub mod lattice;
pub mod query;
pub mod shape;
pub mod tonality;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix4, Point2, Point3, Translation3, UnitVector3, Vector2, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
