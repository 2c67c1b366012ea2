use glam::Vec3;
use tracing::debug;

use crate::engine::{
    input::{Action, InputState},
    scene::{Scene, SceneEvent},
};

use super::{
    config::StationConfig,
    effects::{ParticleEffect, Tooltip},
    part::StationParts,
    sequence::soldering_cycle,
    sequencer::{Sequencer, SequencerState},
};

/// The soldering machine prop: two animated parts, optional tooltip and
/// particle references, and the sequencer that plays the choreography.
///
/// The host delivers hover state through [SceneEvent]s and the select action
/// through the per-tick [InputState]; everything else runs off
/// [Scene::update].
pub struct SolderStation {
    config: StationConfig,
    parts: StationParts,
    sequencer: Sequencer,
    particles: Option<Box<dyn ParticleEffect>>,
    tooltip: Option<Box<dyn Tooltip>>,
    hovered: bool,
}

impl SolderStation {
    pub fn new(config: StationConfig, parts: StationParts) -> Self {
        Self {
            config,
            parts,
            sequencer: Sequencer::default(),
            particles: None,
            tooltip: None,
            hovered: false,
        }
    }

    pub fn with_particles(mut self, particles: impl ParticleEffect + 'static) -> Self {
        self.particles = Some(Box::new(particles));
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Tooltip + 'static) -> Self {
        self.tooltip = Some(Box::new(tooltip));
        self
    }

    pub fn observe_completion(&mut self, callback: impl FnMut() + 'static) {
        self.sequencer.observe_completion(callback);
    }

    pub fn parts(&self) -> &StationParts {
        &self.parts
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn is_running(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Hide the tooltip and play the choreography from the first step,
    /// preempting any run already in flight.
    pub fn trigger(&mut self) {
        if let Some(tooltip) = self.tooltip.as_deref_mut() {
            tooltip.set_visible(false);
        }

        let carriage_origin = self
            .parts
            .carriage
            .map(|part| part.original_position())
            .unwrap_or(Vec3::ZERO);
        let head_origin = self
            .parts
            .head
            .map(|part| part.original_position())
            .unwrap_or(Vec3::ZERO);

        let steps = soldering_cycle(&self.config, carriage_origin, head_origin);
        self.sequencer.start(
            steps,
            self.config.repeat_count,
            self.config.move_duration,
            self.particles.as_deref_mut(),
        );
    }
}

impl Scene for SolderStation {
    fn event(&mut self, event: &SceneEvent) {
        match event {
            SceneEvent::HoverEntered => self.hovered = true,
            SceneEvent::HoverExited => self.hovered = false,
        }
        debug!(hovered = self.hovered, "hover state changed");
    }

    fn update(&mut self, delta_time: f32, input: &InputState) {
        // The select edge only counts while the interactor hovers us.
        if self.hovered && input.just_pressed(Action::Select) {
            self.trigger();
        }

        self.sequencer
            .tick(delta_time, &mut self.parts, self.particles.as_deref_mut());
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::game::part::MovablePart;

    struct TooltipProbe {
        visible: Rc<Cell<bool>>,
    }

    impl Tooltip for TooltipProbe {
        fn set_visible(&mut self, visible: bool) {
            self.visible.set(visible);
        }
    }

    fn station() -> SolderStation {
        let parts = StationParts {
            carriage: Some(MovablePart::new(Vec3::ZERO)),
            head: Some(MovablePart::new(Vec3::ZERO)),
        };
        SolderStation::new(StationConfig::default(), parts)
    }

    fn select_pressed() -> InputState {
        let mut input = InputState::default();
        input.press(Action::Select);
        input
    }

    #[test]
    fn select_without_hover_is_ignored() {
        let mut station = station();
        station.update(1.0, &select_pressed());
        assert!(!station.is_running());
    }

    #[test]
    fn select_while_hovered_triggers_the_run() {
        let mut station = station();
        station.event(&SceneEvent::HoverEntered);
        station.update(1.0, &select_pressed());
        assert!(station.is_running());
    }

    #[test]
    fn hover_exit_disarms_the_select_action() {
        let mut station = station();
        station.event(&SceneEvent::HoverEntered);
        station.event(&SceneEvent::HoverExited);
        station.update(1.0, &select_pressed());
        assert!(!station.is_running());
    }

    #[test]
    fn held_select_does_not_retrigger() {
        let mut station = station();
        station.event(&SceneEvent::HoverEntered);

        let mut input = select_pressed();
        station.update(1.0, &input);
        assert_eq!(station.state(), SequencerState::Running);

        // The press edge is consumed by the frame reset; holding the action
        // across later ticks must not restart the run.
        input.reset_current_frame();
        station.update(1.0, &input);
        assert!(input.pressed(Action::Select));
        assert_eq!(station.sequencer.current_step(), Some(2));
    }

    #[test]
    fn trigger_hides_the_tooltip() {
        let visible = Rc::new(Cell::new(true));
        let mut station = station().with_tooltip(TooltipProbe {
            visible: Rc::clone(&visible),
        });

        station.event(&SceneEvent::HoverEntered);
        station.update(1.0, &select_pressed());

        assert!(!visible.get());
    }

    #[test]
    fn run_completes_through_the_scene_interface() {
        let mut station = station();
        let done = Rc::new(Cell::new(0u32));
        let handle = Rc::clone(&done);
        station.observe_completion(move || handle.set(handle.get() + 1));

        station.event(&SceneEvent::HoverEntered);
        let mut input = select_pressed();

        let mut ticks = 0;
        while station.is_running() || ticks == 0 {
            station.update(1.0, &input);
            input.reset_current_frame();
            ticks += 1;
            assert!(ticks < 1_000, "run never completed");
        }

        assert_eq!(done.get(), 1);

        // Without the pulse attached each cycle spans 11 ticks.
        assert_eq!(ticks, 22);

        let parts = station.parts();
        assert_eq!(parts.carriage.unwrap().position(), Vec3::ZERO);
        assert_eq!(parts.head.unwrap().position(), Vec3::ZERO);
    }
}
