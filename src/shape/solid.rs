//! Definition of the regular tetrahedral solid.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{FaceIndex, FaceIndexError, Triangle, FACE_TABLE};
use crate::utils;

/// A regular tetrahedron with a face-duplicated vertex buffer and a world pose.
///
/// The four vertices are labeled `0..4` (A, B, C, D). The solid stores its vertices
/// in a 12-entry buffer laid out face by face following [`FACE_TABLE`], so every face
/// carries its own copy of its three vertices and its own normal. World-space
/// vertices and centroid are derived from the pose on every call.
///
/// The local centroid is the origin, so the pose translation is also the world centroid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Solid {
    edge_length: Real,
    buffer: [Point<Real>; Solid::BUFFER_LEN],
    normals: [Vector<Real>; 4],
    pose: Isometry<Real>,
}

impl Solid {
    /// Number of entries in the face-duplicated vertex buffer.
    pub const BUFFER_LEN: usize = 12;

    /// Creates a regular tetrahedron with the given edge length, at the identity pose.
    ///
    /// # Panics
    ///
    /// Panics if `edge_length` is not strictly positive.
    pub fn new(edge_length: Real) -> Self {
        assert!(
            edge_length > 0.0,
            "A solid must have a strictly positive edge length (got {edge_length})."
        );

        let vertices = Self::canonical_vertices(edge_length);
        let mut buffer = [Point::origin(); Self::BUFFER_LEN];

        for (ordinal, vid) in FACE_TABLE.iter().flatten().enumerate() {
            buffer[ordinal] = vertices[*vid as usize];
        }

        let normals = FACE_TABLE.map(|[a, b, c]| {
            let tri = Triangle::new(
                vertices[a as usize],
                vertices[b as usize],
                vertices[c as usize],
            );
            tri.scaled_normal().normalize()
        });

        Solid {
            edge_length,
            buffer,
            normals,
            pose: Isometry::identity(),
        }
    }

    /// The four local vertices A, B, C, D of a regular tetrahedron centered at the origin.
    ///
    /// The canonical offsets `(±1, 0, -1/√2)` and `(0, ±1, 1/√2)` have an edge length of 2,
    /// so they are scaled by half the requested edge length.
    pub fn canonical_vertices(edge_length: Real) -> [Point<Real>; 4] {
        let s = edge_length * 0.5;
        let k = na::convert::<f64, Real>(core::f64::consts::FRAC_1_SQRT_2);

        [
            Point::new(1.0, 0.0, -k) * s,
            Point::new(-1.0, 0.0, -k) * s,
            Point::new(0.0, 1.0, k) * s,
            Point::new(0.0, -1.0, k) * s,
        ]
    }

    /// The edge length of this solid.
    #[inline]
    pub fn edge_length(&self) -> Real {
        self.edge_length
    }

    /// The world pose of this solid.
    #[inline]
    pub fn pose(&self) -> &Isometry<Real> {
        &self.pose
    }

    /// Replaces the world pose of this solid.
    #[inline]
    pub fn set_pose(&mut self, pose: Isometry<Real>) {
        self.pose = pose;
    }

    /// Returns this solid moved to the given pose.
    #[inline]
    pub fn with_pose(mut self, pose: Isometry<Real>) -> Self {
        self.pose = pose;
        self
    }

    /// The local-space, face-duplicated vertex buffer.
    ///
    /// The triangle of the face `i` occupies the entries `3 * i .. 3 * i + 3`.
    #[inline]
    pub fn vertex_buffer(&self) -> &[Point<Real>; Self::BUFFER_LEN] {
        &self.buffer
    }

    /// The local-space outward unit normal of each face.
    #[inline]
    pub fn face_normals(&self) -> &[Vector<Real>; 4] {
        &self.normals
    }

    /// The position, inside of the vertex buffer, of the first copy of the vertex `vid`.
    ///
    /// # Panics
    ///
    /// Panics if `vid >= 4`.
    pub fn buffer_ordinal_of_vertex(vid: u32) -> usize {
        FACE_TABLE
            .iter()
            .flatten()
            .position(|v| *v == vid)
            .unwrap_or_else(|| panic!("Solid vertex index out of bounds (must be < 4)."))
    }

    /// The ordinal of the first vertex of the `i`-th triangle of the vertex buffer.
    #[inline]
    pub fn triangle_first_ordinal(i: u32) -> u32 {
        i * 3
    }

    /// Recovers the face that contains the given vertex buffer entry.
    ///
    /// `ordinal` is the position of the first vertex of a hit triangle inside of the
    /// 12-entry vertex buffer. Anything that does not map to a face in `0..4` is a
    /// geometry contract violation and returns [`FaceIndexError::OutOfRange`].
    pub fn face_index_from_hit(ordinal: u32) -> Result<FaceIndex, FaceIndexError> {
        let face = ordinal / 3;
        FaceIndex::try_from(face).map_err(|_| FaceIndexError::OutOfRange { ordinal, face })
    }

    /// The local vertices A, B, C, D, read back from the vertex buffer.
    pub fn local_vertices(&self) -> [Point<Real>; 4] {
        [0, 1, 2, 3].map(|vid| self.buffer[Self::buffer_ordinal_of_vertex(vid)])
    }

    /// The world-space vertices A, B, C, D under the current pose.
    pub fn world_vertices(&self) -> [Point<Real>; 4] {
        self.local_vertices().map(|pt| self.pose * pt)
    }

    /// The world-space centroid: the mean of [`Self::world_vertices`].
    pub fn world_centroid(&self) -> Point<Real> {
        utils::center(&self.world_vertices())
    }

    /// The local-space triangle of the given face, in winding order.
    #[inline]
    pub fn local_triangle(&self, face: FaceIndex) -> Triangle {
        let i = face.get() * 3;
        Triangle::new(self.buffer[i], self.buffer[i + 1], self.buffer[i + 2])
    }

    /// The world-space triangle of the given face, in winding order.
    #[inline]
    pub fn world_triangle(&self, face: FaceIndex) -> Triangle {
        self.local_triangle(face).transformed(&self.pose)
    }

    /// The four world-space triangles, in face order.
    pub fn world_triangles(&self) -> [Triangle; 4] {
        FaceIndex::ALL.map(|face| self.world_triangle(face))
    }
}
