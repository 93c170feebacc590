use crate::{notes, ray_at_face, ray_to_nowhere, Effect, Recorders};
use hedrite3d::interaction::{Dispatched, InputEvent, InputQueue};
use hedrite3d::lattice::{AttachmentPolicy, ConfigError, Lattice, LatticeConfig};
use hedrite3d::math::Vector;
use hedrite3d::query::Ray;
use hedrite3d::shape::{FaceIndex, FaceMask};
use hedrite3d::tonality::notes_to_color;

fn lattice(recorders: &mut Recorders) -> Lattice {
    Lattice::new(LatticeConfig::default(), &mut recorders.collaborators()).unwrap()
}

#[test]
fn the_root_cell_is_added_to_the_scene() {
    let mut recorders = Recorders::default();
    let lattice = lattice(&mut recorders);

    assert_eq!(lattice.len(), 1);
    assert_eq!(recorders.scene.scene.len(), 1);
    assert_eq!(recorders.scene.scene[0].0, lattice.root());
    assert_eq!(recorders.debug.dots, 0);
}

#[test]
fn primary_plays_the_chord_once() {
    let mut recorders = Recorders::default();
    let mut lattice = lattice(&mut recorders);
    let root = lattice.root();

    let mut queue = InputQueue::new();
    queue.push(InputEvent::PointerMoved(ray_at_face(
        lattice.cell(root).unwrap().solid(),
        FaceIndex::C,
    )));
    queue.push(InputEvent::Primary);
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());

    assert_eq!(outcomes, vec![Dispatched::Activated(root)]);
    assert_eq!(recorders.audio.chords, vec![notes(&["C4", "E4", "G4", "B4"])]);
    assert_eq!(
        recorders.effects.effects,
        vec![Effect::Flash(root), Effect::Enter(root)]
    );
    assert_eq!(lattice.len(), 1);
    assert_eq!(recorders.scene.scene.len(), 1);
    assert_eq!(lattice.dispatcher().last_activated(), Some(root));
}

#[test]
fn secondary_attaches_a_child_with_a_new_note() {
    let mut recorders = Recorders::default();
    let mut lattice = lattice(&mut recorders);
    let root = lattice.root();

    let mut queue = InputQueue::new();
    queue.push(InputEvent::PointerMoved(ray_at_face(
        lattice.cell(root).unwrap().solid(),
        FaceIndex::A,
    )));
    queue.push(InputEvent::Secondary);
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());

    let Dispatched::Spawned { parent, child } = outcomes[0] else {
        panic!("expected a spawn, got {outcomes:?}");
    };
    assert_eq!(parent, root);
    assert_eq!(lattice.len(), 2);

    let cell = lattice.cell(child).unwrap();
    assert_eq!(cell.notes().to_vec(), notes(&["E4", "G4", "B4", "A4"]));
    assert_eq!(cell.occupied(), FaceMask::A);
    assert_eq!(lattice.cell(root).unwrap().occupied(), FaceMask::A);

    assert!(recorders.audio.chords.is_empty());
    assert_eq!(recorders.scene.scene.len(), 2);
    assert_eq!(
        recorders.scene.scene[1],
        (child, notes_to_color(cell.notes()))
    );
}

#[test]
fn occupied_faces_do_not_spawn_twice() {
    let mut recorders = Recorders::default();
    let mut lattice = lattice(&mut recorders);
    let root = lattice.root();
    let solid = lattice.cell(root).unwrap().solid().clone();

    let mut queue = InputQueue::new();
    queue.push(InputEvent::PointerMoved(ray_at_face(&solid, FaceIndex::B)));
    queue.push(InputEvent::Secondary);
    let _ = lattice.step(&mut queue, &mut recorders.collaborators());
    assert_eq!(lattice.len(), 2);

    // From inside of the root, the shared face is the nearest hit of both cells.
    let inside = solid.world_centroid();
    let outward = (solid.world_triangle(FaceIndex::B).center() - inside).normalize();
    queue.push(InputEvent::PointerMoved(Ray::new(inside, outward)));
    queue.push(InputEvent::Secondary);
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());

    assert!(matches!(outcomes[..], [Dispatched::Ignored(_)]));
    assert_eq!(lattice.len(), 2);
    assert_eq!(recorders.scene.scene.len(), 2);
}

#[test]
fn duplicates_are_spawned_when_allowed() {
    let mut recorders = Recorders::default();
    let config = LatticeConfig {
        attachment_policy: AttachmentPolicy::AllowDuplicates,
        debug_draw: true,
        ..LatticeConfig::default()
    };
    let mut lattice = Lattice::new(config, &mut recorders.collaborators()).unwrap();
    let solid = lattice.cell(lattice.root()).unwrap().solid().clone();

    let inside = solid.world_centroid();
    let outward = (solid.world_triangle(FaceIndex::C).center() - inside).normalize();

    let mut queue = InputQueue::new();
    queue.push(InputEvent::PointerMoved(Ray::new(inside, outward)));
    queue.push(InputEvent::Secondary);
    queue.push(InputEvent::Secondary);
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes
        .iter()
        .all(|outcome| matches!(outcome, Dispatched::Spawned { .. })));
    assert_eq!(lattice.len(), 3);

    // Five dots and four arrows per cell.
    assert_eq!(recorders.debug.dots, 15);
    assert_eq!(recorders.debug.arrows, 12);
}

#[test]
fn events_are_handled_in_order_with_fresh_hits() {
    let mut recorders = Recorders::default();
    let mut lattice = lattice(&mut recorders);
    let root = lattice.root();
    let solid = lattice.cell(root).unwrap().solid().clone();

    let mut queue = InputQueue::new();
    queue.push(InputEvent::Primary);
    queue.push(InputEvent::PointerMoved(ray_at_face(&solid, FaceIndex::D)));
    queue.push(InputEvent::Primary);
    queue.push(InputEvent::PointerMoved(ray_to_nowhere()));
    queue.push(InputEvent::Secondary);
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());

    assert_eq!(
        outcomes,
        vec![
            Dispatched::Missed,
            Dispatched::Activated(root),
            Dispatched::Missed
        ]
    );
    assert_eq!(recorders.audio.chords.len(), 1);
    assert_eq!(lattice.len(), 1);
    assert!(queue.is_empty());
    assert_eq!(lattice.hovered(), None);
}

#[test]
fn picking_beyond_the_max_distance_misses() {
    let mut recorders = Recorders::default();
    let config = LatticeConfig {
        max_pick_distance: 1.0,
        ..LatticeConfig::default()
    };
    let mut lattice = Lattice::new(config, &mut recorders.collaborators()).unwrap();

    let mut queue = InputQueue::new();
    queue.push(InputEvent::PointerMoved(Ray::new(
        hedrite3d::math::Point::new(0.0, 0.0, -10.0),
        Vector::z(),
    )));
    queue.push(InputEvent::Primary);
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());

    assert_eq!(outcomes, vec![Dispatched::Missed]);
    assert!(lattice.pick().is_none());
}

#[test]
fn invalid_configs_are_rejected() {
    let mut recorders = Recorders::default();
    let config = LatticeConfig {
        edge_length: -1.0,
        ..LatticeConfig::default()
    };
    assert_eq!(
        Lattice::new(config, &mut recorders.collaborators()).err(),
        Some(ConfigError::NonPositiveEdgeLength(-1.0))
    );
    assert!(recorders.scene.scene.is_empty());
}
