mod clicks;
mod hover;

use hedrite3d::debug::DebugSink;
use hedrite3d::interaction::{
    AudioSink, Collaborators, EffectSink, InteractableHandle, SceneSink,
};
use hedrite3d::math::{Point, Real, Vector};
use hedrite3d::query::Ray;
use hedrite3d::shape::Solid;
use hedrite3d::tonality::{Hsl, Note};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Enter(InteractableHandle),
    Exit(InteractableHandle),
    Flash(InteractableHandle),
}

/// Records everything the lattice asks its collaborators to do.
#[derive(Default)]
pub struct Recorder {
    pub chords: Vec<Vec<Note>>,
    pub effects: Vec<Effect>,
    pub scene: Vec<(InteractableHandle, Hsl)>,
    pub arrows: usize,
    pub dots: usize,
}

impl AudioSink for Recorder {
    fn play_chord(&mut self, notes: &[Note]) {
        self.chords.push(notes.to_vec());
    }
}

impl EffectSink for Recorder {
    fn hover_enter(&mut self, handle: InteractableHandle) {
        self.effects.push(Effect::Enter(handle));
    }

    fn hover_exit(&mut self, handle: InteractableHandle) {
        self.effects.push(Effect::Exit(handle));
    }

    fn flash(&mut self, handle: InteractableHandle) {
        self.effects.push(Effect::Flash(handle));
    }
}

impl SceneSink for Recorder {
    fn insert_solid(&mut self, handle: InteractableHandle, _: &Solid, color: Hsl) {
        self.scene.push((handle, color));
    }
}

impl DebugSink for Recorder {
    fn arrow(&mut self, _: &Point<Real>, _: &Vector<Real>, _: u32) {
        self.arrows += 1;
    }

    fn dot(&mut self, _: &Point<Real>, _: u32) {
        self.dots += 1;
    }
}

/// One recorder per collaborator, so that they can be borrowed together.
#[derive(Default)]
pub struct Recorders {
    pub audio: Recorder,
    pub effects: Recorder,
    pub scene: Recorder,
    pub debug: Recorder,
}

impl Recorders {
    pub fn collaborators(&mut self) -> Collaborators<'_> {
        Collaborators::new(
            &mut self.audio,
            &mut self.effects,
            &mut self.scene,
            &mut self.debug,
        )
    }
}

pub fn notes(names: &[&str]) -> Vec<Note> {
    names.iter().map(|n| n.parse().unwrap()).collect()
}

/// A ray coming from far away straight at the center of the given face of `solid`.
pub fn ray_at_face(solid: &Solid, face: hedrite3d::shape::FaceIndex) -> Ray {
    let target = solid.world_triangle(face).center();
    let origin = target + (target - solid.world_centroid()).normalize() * 10.0;
    Ray::new(origin, (target - origin).normalize())
}

/// A ray that misses everything near the origin.
pub fn ray_to_nowhere() -> Ray {
    Ray::new(Point::new(100.0, 100.0, 100.0), Vector::x())
}
