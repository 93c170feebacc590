use crate::query::Ray;
use std::collections::VecDeque;

/// A user input, already expressed in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer moved: the new picking ray going through it.
    PointerMoved(Ray),
    /// The primary button (left click) was pressed.
    Primary,
    /// The secondary button (right click) was pressed.
    Secondary,
}

/// A FIFO of pending input events.
///
/// Events are pushed as they arrive from the windowing layer and drained once per frame, in
/// arrival order.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event at the back of the queue.
    #[inline]
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// The number of pending events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether there is no pending event.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes and yields every pending event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}
