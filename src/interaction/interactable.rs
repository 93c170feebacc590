use crate::interaction::Collaborators;
use crate::math::{Point, Real, Vector};
use crate::shape::{FaceIndex, Solid};
use core::fmt;

/// The handle of an object registered with an [`InteractionDispatcher`](crate::interaction::InteractionDispatcher).
///
/// Handles are never reused: registered objects are never removed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InteractableHandle(pub(crate) usize);

impl InteractableHandle {
    /// The registration rank of this handle (0 for the first registered object).
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for InteractableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The resolved result of a picking ray hitting a registered object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitInfo {
    /// The object that was hit.
    pub handle: InteractableHandle,
    /// The world-space point where the ray hit the object.
    pub world_point: Point<Real>,
    /// The world-space normal of the hit triangle, facing the ray origin.
    pub normal: Vector<Real>,
    /// The face that was hit, if the geometry has faces.
    pub face: Option<FaceIndex>,
    /// The distance between the ray origin and `world_point`.
    pub distance: Real,
}

impl HitInfo {
    /// The face that was hit.
    ///
    /// # Panics
    ///
    /// Panics if this hit does not identify a face. Geometry-aware actions require one.
    #[inline]
    pub fn unwrap_face(&self) -> FaceIndex {
        match self.face {
            Some(face) => face,
            None => panic!("The hit on {} does not identify a face.", self.handle),
        }
    }
}

/// What an interactable asks its dispatcher to do after handling an action.
#[derive(Debug)]
pub enum Response<T> {
    /// Nothing to record.
    Ignored,
    /// The object was activated and should be recorded as the last activated object.
    Activated,
    /// A new object must be registered next to the one that handled the action.
    Spawn(T),
}

/// An object that can be hovered and clicked through a picking ray.
///
/// Dispatch goes exclusively through this trait: the dispatcher never inspects the concrete
/// type of the registered objects.
pub trait Interactable: Sized {
    /// The world-space geometry the picking rays are cast against.
    fn geometry(&self) -> &Solid;

    /// Sets the hover state of this object.
    ///
    /// This is called for every registered object on every update, so it must be a no-op
    /// when the state does not change. `hit` is `Some` only when `hovered` is `true`.
    fn set_hover(
        &mut self,
        handle: InteractableHandle,
        hovered: bool,
        hit: Option<&HitInfo>,
        collaborators: &mut Collaborators<'_>,
    );

    /// Handles a primary action (left click) landing on this object.
    fn on_primary(&mut self, hit: &HitInfo, collaborators: &mut Collaborators<'_>) -> Response<Self>;

    /// Handles a secondary action (right click) landing on this object.
    ///
    /// `hit.face` is always resolved for hits produced by the dispatcher.
    fn on_secondary(
        &mut self,
        hit: &HitInfo,
        collaborators: &mut Collaborators<'_>,
    ) -> Response<Self>;
}
