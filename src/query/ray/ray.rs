//! Traits and structure needed to cast rays.

use crate::math::{Isometry, Matrix4, Point, Point2, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at `origin` and extending along `dir`.
/// The direction does not need to be normalized, but a unit direction makes
/// time-of-impact values represent actual distances.
///
/// # Example
///
/// ```rust
/// use hedrite3d::query::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(ray.point_at(5.0), Point3::new(5.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Builds the picking ray going through the given point of the screen.
    ///
    /// `ndc` is expressed in normalized device coordinates (`[-1, 1]` on both axes, `y` up)
    /// and `inverse_view_projection` is the inverse of the camera's view-projection
    /// matrix. The ray starts on the near plane and has a unit direction.
    ///
    /// Returns `None` if the near and far points unproject to the same location.
    pub fn through_ndc(
        ndc: &Point2<Real>,
        inverse_view_projection: &Matrix4<Real>,
    ) -> Option<Ray> {
        let near = inverse_view_projection.transform_point(&Point::new(ndc.x, ndc.y, -1.0));
        let far = inverse_view_projection.transform_point(&Point::new(ndc.x, ndc.y, 1.0));
        let dir = (far - near).try_normalize(crate::math::DEFAULT_EPSILON)?;

        Some(Ray::new(near, dir))
    }

    /// Transforms this ray by the given isometry (translation + rotation).
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir)
    }

    /// Transforms this ray by the inverse of the given isometry.
    ///
    /// This is equivalent to transforming the ray to the local space of an object.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }

    /// Computes the point `origin + dir * t` along the ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Result of a successful ray cast against a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The time of impact (parameter `t`) where the ray hits the shape.
    ///
    /// The exact hit point can be computed with `ray.point_at(time_of_impact)`.
    pub time_of_impact: Real,

    /// The surface normal at the intersection point, facing the ray origin.
    pub normal: Vector<Real>,

    /// The index of the triangle that was hit.
    ///
    /// For a single triangle, this is 0 for a hit on its front face and 1 for a hit on its
    /// back face. For a [`Solid`](crate::shape::Solid), this is the index of the triangle
    /// inside of its face-duplicated vertex buffer.
    pub triangle: u32,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(time_of_impact: Real, normal: Vector<Real>, triangle: u32) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
            triangle,
        }
    }

    /// Transforms the normal of this intersection by `transform`.
    #[inline]
    pub fn transform_by(&self, transform: &Isometry<Real>) -> Self {
        RayIntersection {
            time_of_impact: self.time_of_impact,
            normal: transform * self.normal,
            triangle: self.triangle,
        }
    }
}

/// Traits of objects which can be transformed and tested for intersection with a ray.
pub trait RayCast {
    /// Computes the time of impact, and normal between this shape and a ray, in local-space.
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection>;

    /// Computes the time of impact between this shape and a ray, in local-space.
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        self.cast_local_ray_and_get_normal(ray, max_time_of_impact)
            .map(|inter| inter.time_of_impact)
    }

    /// Computes the time of impact between this transformed shape and a ray.
    fn cast_ray(&self, m: &Isometry<Real>, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        let ls_ray = ray.inverse_transform_by(m);
        self.cast_local_ray(&ls_ray, max_time_of_impact)
    }

    /// Computes the time of impact, and normal between this transformed shape and a ray.
    fn cast_ray_and_get_normal(
        &self,
        m: &Isometry<Real>,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection> {
        let ls_ray = ray.inverse_transform_by(m);
        self.cast_local_ray_and_get_normal(&ls_ray, max_time_of_impact)
            .map(|inter| inter.transform_by(m))
    }

    /// Tests whether a ray intersects this transformed shape.
    #[inline]
    fn intersects_ray(&self, m: &Isometry<Real>, ray: &Ray, max_time_of_impact: Real) -> bool {
        self.cast_ray(m, ray, max_time_of_impact).is_some()
    }
}
