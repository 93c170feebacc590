use crate::interaction::{Collaborators, HitInfo, Interactable, InteractableHandle, Response};
use crate::lattice::AttachmentPolicy;
use crate::shape::{FaceIndex, FaceMask, Solid};
use crate::tonality::{notes_to_color, pick_note, Hsl, Note};
use crate::transformation::attach;
use arrayvec::ArrayVec;

/// One tetrahedron of the lattice and the four-note chord it plays.
///
/// A left click plays the chord. A right click on a face attaches a new cell to that face:
/// the child keeps the three notes not at the clicked face index, in order, and gets a fourth
/// one picked from their harmonic center, avoiding every note of the parent.
#[derive(Clone, Debug)]
pub struct Cell {
    solid: Solid,
    notes: [Note; 4],
    hovered: bool,
    occupied: FaceMask,
    policy: AttachmentPolicy,
}

impl Cell {
    /// Creates a free-standing cell: nothing is attached to it and it is not hovered.
    pub fn new(solid: Solid, notes: [Note; 4], policy: AttachmentPolicy) -> Self {
        Cell {
            solid,
            notes,
            hovered: false,
            occupied: FaceMask::empty(),
            policy,
        }
    }

    /// The geometry of this cell.
    #[inline]
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// The chord of this cell.
    #[inline]
    pub fn notes(&self) -> &[Note; 4] {
        &self.notes
    }

    /// Whether the pointer is over this cell.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The faces that already have a neighbor.
    #[inline]
    pub fn occupied(&self) -> FaceMask {
        self.occupied
    }

    /// The fill color of this cell, derived from its chord.
    pub fn color(&self) -> Hsl {
        notes_to_color(&self.notes)
    }

    /// The chord of the cell that would be attached on `face`.
    pub fn child_notes(&self, face: FaceIndex) -> [Note; 4] {
        let retained: ArrayVec<Note, 3> = self
            .notes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != face.get())
            .map(|(_, note)| *note)
            .collect();

        let picked = pick_note(&retained, &self.notes);
        [retained[0], retained[1], retained[2], picked]
    }

    /// Builds the cell attached on `face` and marks that face as occupied.
    ///
    /// Returns `None` if the face already has a neighbor and the policy rejects duplicates.
    pub fn spawn_child(&mut self, face: FaceIndex) -> Option<Cell> {
        if self.occupied.contains(face.mask())
            && self.policy == AttachmentPolicy::RejectOccupied
        {
            log::warn!("{face} already has a neighbor, nothing is attached");
            return None;
        }

        let child_solid = Solid::new(self.solid.edge_length());
        let pose = attach(&self.solid, face, &child_solid);
        let notes = self.child_notes(face);

        log::debug!(
            "attaching a cell on {face}: {} {} {} {}",
            notes[0],
            notes[1],
            notes[2],
            notes[3]
        );

        self.occupied |= face.mask();

        // The child face with the same index is the one glued to the parent.
        let mut child = Cell::new(child_solid.with_pose(pose), notes, self.policy);
        child.occupied = face.mask();
        Some(child)
    }
}

impl Interactable for Cell {
    fn geometry(&self) -> &Solid {
        &self.solid
    }

    fn set_hover(
        &mut self,
        handle: InteractableHandle,
        hovered: bool,
        _: Option<&HitInfo>,
        collaborators: &mut Collaborators<'_>,
    ) {
        if self.hovered == hovered {
            return;
        }

        self.hovered = hovered;
        if hovered {
            collaborators.effects.hover_enter(handle);
        } else {
            collaborators.effects.hover_exit(handle);
        }
    }

    fn on_primary(&mut self, hit: &HitInfo, collaborators: &mut Collaborators<'_>) -> Response<Self> {
        collaborators.audio.play_chord(&self.notes);
        collaborators.effects.flash(hit.handle);
        Response::Activated
    }

    fn on_secondary(
        &mut self,
        hit: &HitInfo,
        _: &mut Collaborators<'_>,
    ) -> Response<Self> {
        match self.spawn_child(hit.unwrap_face()) {
            Some(child) => Response::Spawn(child),
            None => Response::Ignored,
        }
    }
}
