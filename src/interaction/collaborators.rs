//! The outside world as seen by interactable objects.

use crate::debug::DebugSink;
use crate::interaction::InteractableHandle;
use crate::shape::Solid;
use crate::tonality::{Hsl, Note};

/// Plays chords.
pub trait AudioSink {
    /// Plays every note of `notes` together.
    fn play_chord(&mut self, notes: &[Note]);
}

/// Visual feedback attached to registered objects.
pub trait EffectSink {
    /// The pointer started hovering the object.
    fn hover_enter(&mut self, handle: InteractableHandle);
    /// The pointer stopped hovering the object.
    fn hover_exit(&mut self, handle: InteractableHandle);
    /// The object was activated.
    fn flash(&mut self, handle: InteractableHandle);
}

/// The scene graph the solids are drawn in.
pub trait SceneSink {
    /// Adds a solid to the scene, with the fill color of its chord.
    fn insert_solid(&mut self, handle: InteractableHandle, solid: &Solid, color: Hsl);
}

/// An audio sink that stays silent.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play_chord(&mut self, _: &[Note]) {}
}

/// An effect sink that shows nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullEffectSink;

impl EffectSink for NullEffectSink {
    fn hover_enter(&mut self, _: InteractableHandle) {}
    fn hover_exit(&mut self, _: InteractableHandle) {}
    fn flash(&mut self, _: InteractableHandle) {}
}

/// A scene sink that draws nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSceneSink;

impl SceneSink for NullSceneSink {
    fn insert_solid(&mut self, _: InteractableHandle, _: &Solid, _: Hsl) {}
}

/// The collaborators handed down to interactable objects for the duration of one call.
///
/// Objects never keep these around: they are borrowed again on every dispatch.
pub struct Collaborators<'a> {
    /// Where chords are played.
    pub audio: &'a mut dyn AudioSink,
    /// Where hover and activation feedback goes.
    pub effects: &'a mut dyn EffectSink,
    /// Where new solids are registered for drawing.
    pub scene: &'a mut dyn SceneSink,
    /// Where debug geometry is drawn.
    pub debug: &'a mut dyn DebugSink,
}

impl<'a> Collaborators<'a> {
    /// Groups the given collaborators.
    pub fn new(
        audio: &'a mut dyn AudioSink,
        effects: &'a mut dyn EffectSink,
        scene: &'a mut dyn SceneSink,
        debug: &'a mut dyn DebugSink,
    ) -> Self {
        Collaborators {
            audio,
            effects,
            scene,
            debug,
        }
    }
}
