use hedrite3d::math::Real;
use hedrite3d::shape::{FaceIndex, Solid};
use hedrite3d::transformation::{attach, face_to_face_centroid_distance};

fn assert_glued(parent: &Solid, face: FaceIndex, child: &Solid) {
    let edge_length = parent.edge_length();
    let tolerance = 1.0e-3 * edge_length;

    assert_relative_eq!(
        na::distance(&parent.world_centroid(), &child.world_centroid()),
        edge_length / (6.0 as Real).sqrt(),
        epsilon = tolerance
    );

    // The three vertices of the shared face coincide, in some order.
    let parent_vertices = parent.world_vertices();
    let child_vertices = child.world_vertices();
    for vid in face.vertex_ids() {
        let pt = parent_vertices[vid as usize];
        assert!(
            child_vertices
                .iter()
                .any(|c| na::distance(c, &pt) <= tolerance),
            "the parent vertex {vid} has no counterpart on the child glued on {face}"
        );
    }

    // The child apex sits on the other side of the shared face.
    let apex = child_vertices[face.get()];
    let normal = parent.world_triangle(face).normal().unwrap();
    let shared = parent.world_triangle(face).center();
    assert!(normal.dot(&(apex - shared)) > 0.0);
}

#[test]
fn attached_solids_are_flush_under_any_parent_pose() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..200 {
        let edge_length = 0.1 + rng.rand_float() as Real * 5.0;
        let parent = Solid::new(edge_length).with_pose(crate::random_pose(&mut rng));

        for face in FaceIndex::ALL {
            let template = Solid::new(edge_length);
            let pose = attach(&parent, face, &template);
            let child = template.with_pose(pose);
            assert_glued(&parent, face, &child);
        }
    }
}

#[test]
fn attachment_chains_stay_flush() {
    let mut rng = oorandom::Rand32::new(99);
    let mut current = Solid::new(1.0);

    for _ in 0..50 {
        let face = FaceIndex::ALL[rng.rand_range(0..4) as usize];
        let template = Solid::new(1.0);
        let child = template.clone().with_pose(attach(&current, face, &template));
        assert_glued(&current, face, &child);
        current = child;
    }

    assert_relative_eq!(
        face_to_face_centroid_distance(3.0),
        3.0 / (6.0 as Real).sqrt(),
        epsilon = 1.0e-5
    );
}
