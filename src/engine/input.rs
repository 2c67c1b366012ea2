use std::collections::HashSet;

/// Logical actions delivered by the host interaction layer. The backing input
/// device (VR controller trigger, mouse button, ...) is the host's concern.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    /// The interactor's select action.
    Select,
}

#[derive(Default)]
pub struct InputState {
    pressed: HashSet<Action>,
    just_pressed: HashSet<Action>,
}

impl InputState {
    /// Record a press edge. Repeats while the action is already held do not
    /// re-arm `just_pressed`.
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Reset data being tracked per frame.
    pub fn reset_current_frame(&mut self) {
        self.just_pressed.clear();
    }
}

impl InputState {
    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }
}
