use hedrite3d::math::Real;
use hedrite3d::query::Ray;
use hedrite3d::shape::{FaceIndex, Solid};

#[test]
fn rays_aimed_at_face_centers_report_that_face() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let solid = Solid::new(2.0).with_pose(crate::random_pose(&mut rng));
        let centroid = solid.world_centroid();

        for face in FaceIndex::ALL {
            let target = solid.world_triangle(face).center();
            let origin = target + (target - centroid).normalize() * 5.0;
            let ray = Ray::new(origin, (target - origin).normalize());

            let inter = solid
                .cast_world_ray(&ray, Real::MAX)
                .unwrap_or_else(|| panic!("Ray {ray:?} missed {face}"));

            let ordinal = Solid::triangle_first_ordinal(inter.triangle);
            assert_eq!(Solid::face_index_from_hit(ordinal), Ok(face));
            assert_relative_eq!(inter.time_of_impact, 5.0, epsilon = 1.0e-3);
            assert!(inter.normal.dot(&ray.dir) < 0.0);
        }
    }
}

#[test]
fn rays_pointing_away_miss() {
    let solid = Solid::new(1.0);
    let ray = Ray::new(
        hedrite3d::math::Point::new(0.0, 0.0, 5.0),
        hedrite3d::math::Vector::z(),
    );
    assert!(solid.cast_world_ray(&ray, Real::MAX).is_none());
}
