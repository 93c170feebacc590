//! Debug drawing of solids through an explicit sink.
//!
//! Nothing in this crate holds a global scene: whichever component wants to draw debug
//! geometry receives a [`DebugSink`] and the caller decides where the shapes end up.

use crate::math::{Point, Real, Vector};
use crate::shape::{FaceIndex, Solid};

/// Colors of the vertices A, B, C and D (red, green, blue, yellow), as `0xRRGGBB`.
pub const VERTEX_COLORS: [u32; 4] = [0xff0000, 0x00ff00, 0x0000ff, 0xffff00];

/// Color of the centroid dot drawn by [`show_vertices`].
pub const CENTROID_COLOR: u32 = 0xffffff;

/// A receiver of debug geometry.
pub trait DebugSink {
    /// Draws an arrow starting at `origin`. The length of `direction` is the arrow length.
    fn arrow(&mut self, origin: &Point<Real>, direction: &Vector<Real>, color: u32);

    /// Draws a small dot at `position`.
    fn dot(&mut self, position: &Point<Real>, color: u32);
}

/// A debug sink discarding everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullDebugSink;

impl DebugSink for NullDebugSink {
    fn arrow(&mut self, _: &Point<Real>, _: &Vector<Real>, _: u32) {}
    fn dot(&mut self, _: &Point<Real>, _: u32) {}
}

/// Draws a dot on each world vertex of `solid`, colored after [`VERTEX_COLORS`], and a
/// white dot on its centroid.
pub fn show_vertices(solid: &Solid, sink: &mut dyn DebugSink) {
    for (vertex, color) in solid.world_vertices().iter().zip(VERTEX_COLORS) {
        sink.dot(vertex, color);
    }

    sink.dot(&solid.world_centroid(), CENTROID_COLOR);
}

/// Draws, for each face, an arrow from the centroid of `solid` along the outward direction of
/// that face (away from the excluded vertex), colored like the excluded vertex.
pub fn show_face_normals(solid: &Solid, sink: &mut dyn DebugSink) {
    let centroid = solid.world_centroid();
    let vertices = solid.world_vertices();

    for face in FaceIndex::ALL {
        let direction = centroid - vertices[face.get()];
        sink.arrow(&centroid, &direction, VERTEX_COLORS[face.get()]);
    }
}
