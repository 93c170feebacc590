//! Pointer-driven hovering and clicking of registered solids.
//!
//! The [`InteractionDispatcher`] owns every interactable object. Each frame, the input events
//! queued since the last frame are processed in order, then the hover state of every object
//! is refreshed from the latest pointer ray.

pub use self::collaborators::{
    AudioSink, Collaborators, EffectSink, NullAudioSink, NullEffectSink, NullSceneSink,
    SceneSink,
};
pub use self::dispatcher::{Dispatched, InteractionDispatcher};
pub use self::input::{InputEvent, InputQueue};
pub use self::interactable::{HitInfo, Interactable, InteractableHandle, Response};
pub use self::pointer::ndc_from_pixels;

mod collaborators;
mod dispatcher;
mod input;
mod interactable;
mod pointer;
