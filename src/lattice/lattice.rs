use crate::debug;
use crate::interaction::{
    Collaborators, Dispatched, HitInfo, InputQueue, InteractableHandle, InteractionDispatcher,
};
use crate::lattice::{Cell, ConfigError, LatticeConfig};
use crate::shape::Solid;

/// A growing lattice of tetrahedral cells, starting from a single root cell.
pub struct Lattice {
    dispatcher: InteractionDispatcher<Cell>,
    config: LatticeConfig,
    root: InteractableHandle,
}

impl Lattice {
    /// Creates a lattice made of the root cell only, and adds that cell to the scene.
    pub fn new(
        config: LatticeConfig,
        collaborators: &mut Collaborators<'_>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut dispatcher = InteractionDispatcher::new(config.max_pick_distance);
        let root = dispatcher.insert(Cell::new(
            Solid::new(config.edge_length),
            config.root_chord,
            config.attachment_policy,
        ));

        let lattice = Lattice {
            dispatcher,
            config,
            root,
        };
        lattice.register(root, collaborators);

        log::debug!("created a lattice with edge length {}", config.edge_length);
        Ok(lattice)
    }

    /// Runs one frame: handles the queued events in order, then refreshes the hover states.
    ///
    /// Cells spawned by the events are added to the scene as soon as they are created.
    /// Returns the outcome of every click.
    pub fn step(
        &mut self,
        queue: &mut InputQueue,
        collaborators: &mut Collaborators<'_>,
    ) -> Vec<Dispatched> {
        let mut outcomes = Vec::new();

        for event in queue.drain() {
            let Some(outcome) = self.dispatcher.handle_event(event, collaborators) else {
                continue;
            };

            if let Dispatched::Spawned { child, .. } = outcome {
                self.register(child, collaborators);
            }

            outcomes.push(outcome);
        }

        let _ = self.dispatcher.update(collaborators);
        outcomes
    }

    fn register(&self, handle: InteractableHandle, collaborators: &mut Collaborators<'_>) {
        let Some(cell) = self.dispatcher.get(handle) else {
            return;
        };

        collaborators
            .scene
            .insert_solid(handle, cell.solid(), cell.color());

        if self.config.debug_draw {
            debug::show_vertices(cell.solid(), collaborators.debug);
            debug::show_face_normals(cell.solid(), collaborators.debug);
        }
    }

    /// The cell registered with the given handle.
    #[inline]
    pub fn cell(&self, handle: InteractableHandle) -> Option<&Cell> {
        self.dispatcher.get(handle)
    }

    /// Iterates through every cell, in creation order.
    pub fn cells(&self) -> impl Iterator<Item = (InteractableHandle, &Cell)> {
        self.dispatcher.iter()
    }

    /// The number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.dispatcher.len()
    }

    /// Whether the lattice has no cell. A lattice always has at least its root cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dispatcher.is_empty()
    }

    /// The handle of the root cell.
    #[inline]
    pub fn root(&self) -> InteractableHandle {
        self.root
    }

    /// The configuration this lattice was built with.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// The cell under the pointer after the last step.
    #[inline]
    pub fn hovered(&self) -> Option<InteractableHandle> {
        self.dispatcher.hovered()
    }

    /// The cell under the current pointer ray, if any.
    pub fn pick(&self) -> Option<HitInfo> {
        self.dispatcher
            .pointer_ray()
            .and_then(|ray| self.dispatcher.cast(ray))
    }

    /// The dispatcher routing input to the cells.
    #[inline]
    pub fn dispatcher(&self) -> &InteractionDispatcher<Cell> {
        &self.dispatcher
    }
}
