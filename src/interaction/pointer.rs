use crate::math::{Point2, Real};

/// Converts a pointer position in pixels to normalized device coordinates.
///
/// Pixel coordinates have their origin at the top-left corner of the viewport, with `y`
/// going down. The result spans `[-1, 1]` on both axes with `y` going up, as expected by
/// [`Ray::through_ndc`](crate::query::Ray::through_ndc).
#[inline]
pub fn ndc_from_pixels(x: Real, y: Real, width: Real, height: Real) -> Point2<Real> {
    Point2::new(x / width * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}
