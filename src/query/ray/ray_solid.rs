use crate::math::Real;
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{FaceIndex, Solid};

impl RayCast for Solid {
    /// Casts the ray against the four triangles of the vertex buffer and keeps the nearest hit.
    ///
    /// The reported `triangle` indexes the face-duplicated vertex buffer, so its first vertex
    /// lives at [`Solid::triangle_first_ordinal`].
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection> {
        let mut best: Option<RayIntersection> = None;

        for face in FaceIndex::ALL {
            let tri = self.local_triangle(face);

            if let Some(inter) = tri.cast_local_ray_and_get_normal(ray, max_time_of_impact) {
                if best.map_or(true, |b| inter.time_of_impact < b.time_of_impact) {
                    best = Some(RayIntersection::new(
                        inter.time_of_impact,
                        inter.normal,
                        face.get() as u32,
                    ));
                }
            }
        }

        best
    }
}

impl Solid {
    /// Casts a world-space ray against this solid at its current pose.
    #[inline]
    pub fn cast_world_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<RayIntersection> {
        self.cast_ray_and_get_normal(self.pose(), ray, max_time_of_impact)
    }
}
