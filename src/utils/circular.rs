use crate::math::{Real, Vector2};
use na::RealField;

/// The polar angle of `v`, in `[0, 2π)`.
#[inline]
pub fn angle_of(v: &Vector2<Real>) -> Real {
    let angle = v.y.atan2(v.x);

    if angle < 0.0 {
        angle + Real::two_pi()
    } else {
        angle
    }
}

/// The shortest distance between two angles measured around the unit circle.
///
/// The result lies in `[0, π]` whatever the winding of the inputs.
#[inline]
pub fn circular_distance(a: Real, b: Real) -> Real {
    let delta = (a - b).abs() % Real::two_pi();
    delta.min(Real::two_pi() - delta)
}
