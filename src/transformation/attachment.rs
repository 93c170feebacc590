use crate::math::{Isometry, Real, Rotation, Translation};
use crate::shape::{FaceIndex, Solid};
use na::{RealField, Unit};

/// Centroid-to-centroid distance between two face-sharing regular tetrahedra, per unit of
/// the canonical vertex scale (half an edge, see [`Solid::canonical_vertices`]).
///
/// This is `√6 / 3`: twice the inradius of the canonical tetrahedron of edge length 2.
#[allow(clippy::excessive_precision)]
pub const FACE_TO_FACE_CENTROID_RATIO: Real = 0.816_496_580_927_726;

/// Distance between the centroids of two regular tetrahedra of edge length `edge_length`
/// glued along a face.
#[inline]
pub fn face_to_face_centroid_distance(edge_length: Real) -> Real {
    FACE_TO_FACE_CENTROID_RATIO * edge_length * 0.5
}

/// Computes the pose placing `child` flush against the `face` of `parent`.
///
/// The child is moved so that its centroid sits on the outward normal of the chosen face, at
/// [`face_to_face_centroid_distance`] from the parent centroid. It starts from the parent
/// rotation, is flipped by half a turn around the face normal, then by half a turn around
/// one edge of the face. After these two flips the child's face `face` coincides edge for
/// edge with the parent's face `face`, and the child's vertex `face` is the apex pointing away
/// from the parent.
///
/// Only the returned pose is computed: `child` is left untouched.
///
/// # Panics
///
/// Panics if the parent and child edge lengths differ.
pub fn attach(parent: &Solid, face: FaceIndex, child: &Solid) -> Isometry<Real> {
    assert!(
        approx::relative_eq!(parent.edge_length(), child.edge_length()),
        "Only solids with the same edge length can be attached (parent: {}, child: {}).",
        parent.edge_length(),
        child.edge_length()
    );

    let vertices = parent.world_vertices();
    let centroid = parent.world_centroid();

    let opposite_vertex = vertices[face.get()];
    let normal = Unit::new_normalize(centroid - opposite_vertex);
    let distance = face_to_face_centroid_distance(parent.edge_length());
    let child_centroid = centroid + normal.into_inner() * distance;

    let edge_axis = Unit::new_normalize(
        vertices[face.offset(1).get()] - vertices[face.offset(2).get()],
    );

    let flip_normal = Rotation::from_axis_angle(&normal, Real::pi());
    let flip_edge = Rotation::from_axis_angle(&edge_axis, Real::pi());
    let rotation = flip_edge * flip_normal * parent.pose().rotation;

    log::debug!(
        "attaching on {face}: normal {:?}, child centroid {:?}",
        normal.into_inner(),
        child_centroid
    );

    Isometry::from_parts(Translation::from(child_centroid.coords), rotation)
}
