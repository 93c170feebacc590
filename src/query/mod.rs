//! Geometric queries: ray casting against solids.

pub use self::ray::{local_ray_intersection_with_triangle, Ray, RayCast, RayIntersection};

pub mod ray;
