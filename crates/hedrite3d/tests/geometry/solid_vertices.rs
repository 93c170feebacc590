use hedrite3d::math::{Point, Real};
use hedrite3d::shape::{FaceIndex, FaceIndexError, Solid, FACE_TABLE};

#[test]
fn vertices_are_equidistant_around_the_origin() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..200 {
        let edge_length = 0.01 + rng.rand_float() as Real * 10.0;
        let solid = Solid::new(edge_length);
        let vertices = solid.local_vertices();

        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_relative_eq!(
                    na::distance(&vertices[i], &vertices[j]),
                    edge_length,
                    max_relative = 1.0e-4
                );
            }
        }

        assert_relative_eq!(
            solid.world_centroid(),
            Point::origin(),
            epsilon = 1.0e-4 * edge_length
        );
    }
}

#[test]
fn every_face_is_wound_outward_under_any_pose() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..200 {
        let solid = Solid::new(1.0).with_pose(crate::random_pose(&mut rng));
        let centroid = solid.world_centroid();

        for face in FaceIndex::ALL {
            let tri = solid.world_triangle(face);
            let normal = tri.normal().unwrap();
            assert!(normal.dot(&(tri.center() - centroid)) > 0.0);
        }
    }
}

#[test]
fn face_recovery_is_a_left_inverse() {
    for (i, ids) in FACE_TABLE.iter().enumerate() {
        let face = Solid::face_index_from_hit(Solid::triangle_first_ordinal(i as u32)).unwrap();
        assert_eq!(face.get(), i);
        assert_eq!(face.vertex_ids(), *ids);

        // Every entry of the triangle maps back to the same face.
        for k in 0..3 {
            let ordinal = Solid::triangle_first_ordinal(i as u32) + k;
            assert_eq!(Solid::face_index_from_hit(ordinal), Ok(face));
        }
    }

    for ordinal in [12, 13, 100] {
        assert!(matches!(
            Solid::face_index_from_hit(ordinal),
            Err(FaceIndexError::OutOfRange { .. })
        ));
    }
}
