use crate::{ray_at_face, ray_to_nowhere, Effect, Recorders};
use hedrite3d::interaction::{Dispatched, InputEvent, InputQueue};
use hedrite3d::lattice::{Lattice, LatticeConfig};
use hedrite3d::query::Ray;
use hedrite3d::shape::FaceIndex;

fn move_pointer(lattice: &mut Lattice, recorders: &mut Recorders, ray: Ray) {
    let mut queue = InputQueue::new();
    queue.push(InputEvent::PointerMoved(ray));
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());
    assert!(outcomes.is_empty());
}

#[test]
fn hover_effects_fire_on_transitions_only() {
    let mut recorders = Recorders::default();
    let mut lattice =
        Lattice::new(LatticeConfig::default(), &mut recorders.collaborators()).unwrap();
    let x = lattice.root();

    // Grow a second cell on the face A of the root.
    let mut queue = InputQueue::new();
    queue.push(InputEvent::PointerMoved(ray_at_face(
        lattice.cell(x).unwrap().solid(),
        FaceIndex::A,
    )));
    queue.push(InputEvent::Secondary);
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());
    let Dispatched::Spawned { child: y, .. } = outcomes[0] else {
        panic!("expected a spawn, got {outcomes:?}");
    };

    move_pointer(&mut lattice, &mut recorders, ray_to_nowhere());
    assert_eq!(lattice.hovered(), None);
    recorders.effects.effects.clear();

    let on_x = ray_at_face(lattice.cell(x).unwrap().solid(), FaceIndex::B);
    let on_y = ray_at_face(lattice.cell(y).unwrap().solid(), FaceIndex::B);

    move_pointer(&mut lattice, &mut recorders, on_x);
    assert_eq!(lattice.hovered(), Some(x));
    // Staying over the same cell does not fire anything new.
    move_pointer(&mut lattice, &mut recorders, on_x);

    move_pointer(&mut lattice, &mut recorders, ray_to_nowhere());
    assert_eq!(lattice.hovered(), None);

    move_pointer(&mut lattice, &mut recorders, on_y);
    assert_eq!(lattice.hovered(), Some(y));

    assert_eq!(
        recorders.effects.effects,
        vec![Effect::Enter(x), Effect::Exit(x), Effect::Enter(y)]
    );
    assert!(lattice.cell(y).unwrap().is_hovered());
    assert!(!lattice.cell(x).unwrap().is_hovered());
}

#[test]
fn hover_moves_straight_between_cells() {
    let mut recorders = Recorders::default();
    let mut lattice =
        Lattice::new(LatticeConfig::default(), &mut recorders.collaborators()).unwrap();
    let x = lattice.root();

    let mut queue = InputQueue::new();
    queue.push(InputEvent::PointerMoved(ray_at_face(
        lattice.cell(x).unwrap().solid(),
        FaceIndex::D,
    )));
    queue.push(InputEvent::Secondary);
    let outcomes = lattice.step(&mut queue, &mut recorders.collaborators());
    let Dispatched::Spawned { child: y, .. } = outcomes[0] else {
        panic!("expected a spawn, got {outcomes:?}");
    };

    let on_y = ray_at_face(lattice.cell(y).unwrap().solid(), FaceIndex::B);
    move_pointer(&mut lattice, &mut recorders, on_y);
    assert_eq!(lattice.hovered(), Some(y));
    recorders.effects.effects.clear();

    let on_x = ray_at_face(lattice.cell(x).unwrap().solid(), FaceIndex::C);
    move_pointer(&mut lattice, &mut recorders, on_x);

    assert_eq!(lattice.hovered(), Some(x));
    assert_eq!(
        recorders.effects.effects,
        vec![Effect::Enter(x), Effect::Exit(y)]
    );
    recorders.effects.effects.clear();

    // Back to the cell registered last: it still gains the hover first.
    move_pointer(&mut lattice, &mut recorders, on_y);
    assert_eq!(lattice.hovered(), Some(y));
    assert_eq!(
        recorders.effects.effects,
        vec![Effect::Enter(y), Effect::Exit(x)]
    );
}
