use crate::interaction::{
    Collaborators, HitInfo, InputEvent, Interactable, InteractableHandle, Response,
};
use crate::math::Real;
use crate::query::Ray;
use crate::shape::Solid;
use slab::Slab;

/// The outcome of dispatching one click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// The pointer ray hit nothing (or there was no pointer ray yet): nobody was notified.
    Missed,
    /// The hit object handled the action without anything to record.
    Ignored(InteractableHandle),
    /// The hit object was activated.
    Activated(InteractableHandle),
    /// The hit object spawned a new object, now registered as `child`.
    Spawned {
        /// The object that was clicked.
        parent: InteractableHandle,
        /// The newly registered object.
        child: InteractableHandle,
    },
}

impl Dispatched {
    /// The object the action landed on, if any.
    pub fn target(&self) -> Option<InteractableHandle> {
        match self {
            Dispatched::Missed => None,
            Dispatched::Ignored(handle) | Dispatched::Activated(handle) => Some(*handle),
            Dispatched::Spawned { parent, .. } => Some(*parent),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    Primary,
    Secondary,
}

/// Routes pointer input to the nearest registered object under the pointer.
///
/// Objects are registered once and never removed. Their registration order breaks ties
/// between hits at the same distance: the earliest registered object wins.
pub struct InteractionDispatcher<I> {
    registry: Slab<I>,
    pointer: Option<Ray>,
    hovered: Option<InteractableHandle>,
    last_activated: Option<InteractableHandle>,
    max_pick_distance: Real,
}

impl<I: Interactable> InteractionDispatcher<I> {
    /// Creates an empty dispatcher ignoring hits further than `max_pick_distance` (a world
    /// distance, whatever the length of the ray direction) from the pointer ray origin.
    pub fn new(max_pick_distance: Real) -> Self {
        InteractionDispatcher {
            registry: Slab::new(),
            pointer: None,
            hovered: None,
            last_activated: None,
            max_pick_distance,
        }
    }

    /// Registers a new object.
    pub fn insert(&mut self, item: I) -> InteractableHandle {
        let handle = InteractableHandle(self.registry.insert(item));
        log::trace!("registered interactable {handle}");
        handle
    }

    /// The object registered with the given handle.
    #[inline]
    pub fn get(&self, handle: InteractableHandle) -> Option<&I> {
        self.registry.get(handle.0)
    }

    /// The object registered with the given handle, mutably.
    #[inline]
    pub fn get_mut(&mut self, handle: InteractableHandle) -> Option<&mut I> {
        self.registry.get_mut(handle.0)
    }

    /// Iterates through the registered objects, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (InteractableHandle, &I)> {
        self.registry
            .iter()
            .map(|(id, item)| (InteractableHandle(id), item))
    }

    /// The number of registered objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no object is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The latest pointer ray, if the pointer moved at least once.
    #[inline]
    pub fn pointer_ray(&self) -> Option<&Ray> {
        self.pointer.as_ref()
    }

    /// Replaces the pointer ray used by the next clicks and hover update.
    #[inline]
    pub fn set_pointer_ray(&mut self, ray: Ray) {
        self.pointer = Some(ray);
    }

    /// The object hovered after the last [`Self::update`].
    #[inline]
    pub fn hovered(&self) -> Option<InteractableHandle> {
        self.hovered
    }

    /// The object that was activated last.
    #[inline]
    pub fn last_activated(&self) -> Option<InteractableHandle> {
        self.last_activated
    }

    /// Casts `ray` against every registered object and returns the nearest hit.
    ///
    /// # Panics
    ///
    /// Panics if a solid reports a hit triangle that does not map to one of its faces.
    pub fn cast(&self, ray: &Ray) -> Option<HitInfo> {
        let mut best: Option<HitInfo> = None;

        for (handle, item) in self.iter() {
            let solid = item.geometry();
            let Some(inter) = solid.cast_world_ray(ray, Real::MAX) else {
                continue;
            };

            let distance = inter.time_of_impact * ray.dir.norm();
            if distance > self.max_pick_distance {
                continue;
            }

            // Strict comparison: on ties the earliest registered object is kept.
            if best.map_or(true, |b| distance < b.distance) {
                let ordinal = Solid::triangle_first_ordinal(inter.triangle);
                let face = Solid::face_index_from_hit(ordinal)
                    .unwrap_or_else(|err| panic!("Invalid hit on {handle}: {err}."));

                best = Some(HitInfo {
                    handle,
                    world_point: ray.point_at(inter.time_of_impact),
                    normal: inter.normal,
                    face: Some(face),
                    distance,
                });
            }
        }

        best
    }

    /// Refreshes the hover state of every registered object from the current pointer ray.
    ///
    /// The nearest hit object is set as hovered first, then every other object is set as not
    /// hovered. Returns the hit, if any.
    pub fn update(&mut self, collaborators: &mut Collaborators<'_>) -> Option<HitInfo> {
        let hit = self.pointer.as_ref().and_then(|ray| self.cast(ray));
        let hovered = hit.map(|hit| hit.handle);

        if hovered != self.hovered {
            log::trace!("hover changed from {:?} to {:?}", self.hovered, hovered);
            self.hovered = hovered;
        }

        // The hit object gains the hover before any other object loses it.
        if let Some(hit) = &hit {
            if let Some(item) = self.registry.get_mut(hit.handle.0) {
                item.set_hover(hit.handle, true, Some(hit), collaborators);
            }
        }

        for (id, item) in self.registry.iter_mut() {
            let handle = InteractableHandle(id);
            if Some(handle) != hovered {
                item.set_hover(handle, false, None, collaborators);
            }
        }

        hit
    }

    /// Handles one input event.
    ///
    /// Pointer moves only replace the pointer ray. Clicks are resolved against that ray right
    /// away, so a click sees the objects spawned by the clicks before it.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        collaborators: &mut Collaborators<'_>,
    ) -> Option<Dispatched> {
        match event {
            InputEvent::PointerMoved(ray) => {
                self.set_pointer_ray(ray);
                None
            }
            InputEvent::Primary => Some(self.dispatch(Action::Primary, collaborators)),
            InputEvent::Secondary => Some(self.dispatch(Action::Secondary, collaborators)),
        }
    }

    fn dispatch(&mut self, action: Action, collaborators: &mut Collaborators<'_>) -> Dispatched {
        let Some(hit) = self.pointer.as_ref().and_then(|ray| self.cast(ray)) else {
            log::trace!("{action:?} action hit nothing");
            return Dispatched::Missed;
        };

        let parent = hit.handle;
        let Some(item) = self.registry.get_mut(parent.0) else {
            return Dispatched::Missed;
        };

        log::debug!("{action:?} action on {parent} ({:?})", hit.face);

        let response = match action {
            Action::Primary => item.on_primary(&hit, collaborators),
            Action::Secondary => item.on_secondary(&hit, collaborators),
        };

        match response {
            Response::Ignored => Dispatched::Ignored(parent),
            Response::Activated => {
                self.last_activated = Some(parent);
                Dispatched::Activated(parent)
            }
            Response::Spawn(child) => {
                let child = self.insert(child);
                log::debug!("{parent} spawned {child}");
                Dispatched::Spawned { parent, child }
            }
        }
    }
}
