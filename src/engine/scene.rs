use super::input::InputState;

/// Interaction events delivered by the host to a scene object.
#[derive(Clone, Copy, Debug)]
pub enum SceneEvent {
    /// An interactor ray started hovering the object.
    HoverEntered,
    /// An interactor ray stopped hovering the object.
    HoverExited,
}

/// A scene object driven by the host loop. Splits the host callbacks into
/// event delivery and a per-tick update.
#[allow(unused)]
pub trait Scene {
    /// Called when an interaction event occurs.
    fn event(&mut self, event: &SceneEvent) {}

    /// Called each frame with the `delta_time` based on the time the last
    /// frame took and the state of all input devices.
    fn update(&mut self, delta_time: f32, input: &InputState);
}
