use glam::Vec3;
use tracing::{debug, info};

use super::{
    effects::ParticleEffect, interpolate::Interpolate, part::StationParts, sequence::Step,
};

/// Whether a sequence run is in flight.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display)]
pub enum SequencerState {
    #[default]
    Idle,
    Running,
}

/// Progress through the current step.
struct ActiveStep {
    index: usize,
    elapsed: f32,
    entered: bool,
    /// Position captured when a move step is entered.
    move_start: Option<Vec3>,
    /// The particle effect was started for this step and must be stopped
    /// when the step ends, for any reason.
    pulse_live: bool,
}

impl ActiveStep {
    fn at(index: usize) -> Self {
        Self {
            index,
            elapsed: 0.0,
            entered: false,
            move_start: None,
            pulse_live: false,
        }
    }
}

struct Run {
    steps: Vec<Step>,
    cycles_left: u32,
    active: ActiveStep,
}

enum StepOutcome {
    /// The step still needs more ticks.
    InProgress,
    /// The step finished and consumed this tick.
    Finished,
    /// The step finished without consuming any time.
    Immediate,
}

/// Plays one choreography at a time, advanced tick by tick by the host loop.
/// At most one run is active; starting a new run always preempts the old one.
#[derive(Default)]
pub struct Sequencer {
    run: Option<Run>,
    move_duration: f32,
    on_complete: Vec<Box<dyn FnMut()>>,
}

impl Sequencer {
    pub fn state(&self) -> SequencerState {
        if self.run.is_some() {
            SequencerState::Running
        } else {
            SequencerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Zero-based index of the step currently playing.
    pub fn current_step(&self) -> Option<usize> {
        self.run.as_ref().map(|run| run.active.index)
    }

    /// Register a callback fired exactly once per run, after all cycles
    /// finish. Callbacks run synchronously on the ticking thread.
    pub fn observe_completion(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete.push(Box::new(callback));
    }

    /// Cancel any in-flight run and start `steps` from the first step for
    /// `repeat_count` cycles.
    pub fn start(
        &mut self,
        steps: Vec<Step>,
        repeat_count: u32,
        move_duration: f32,
        particles: Option<&mut (dyn ParticleEffect + 'static)>,
    ) {
        self.cancel(particles);

        if steps.is_empty() || repeat_count == 0 {
            // Nothing to play; the run is trivially complete.
            for callback in &mut self.on_complete {
                callback();
            }
            return;
        }

        info!(repeat_count, "Starting soldering sequence");
        self.move_duration = move_duration;
        self.run = Some(Run {
            steps,
            cycles_left: repeat_count,
            active: ActiveStep::at(0),
        });
    }

    /// Discard the in-flight run, if any. Parts stay wherever the cancel
    /// left them; the next run reads current positions at each move's entry.
    pub fn cancel(&mut self, particles: Option<&mut (dyn ParticleEffect + 'static)>) {
        let Some(run) = self.run.take() else {
            return;
        };

        // Don't leave the effect burning past its owner run.
        if run.active.pulse_live {
            if let Some(particles) = particles {
                particles.stop();
            }
        }

        info!(step = run.active.index + 1, "Soldering sequence cancelled");
    }

    /// Advance the active run by one host tick. A timed step consumes the
    /// whole tick; steps that finish without consuming time (zero durations,
    /// absent parts, a skipped pulse) let the next step start within the same
    /// tick so the run never stalls.
    pub fn tick(
        &mut self,
        delta_time: f32,
        parts: &mut StationParts,
        mut particles: Option<&mut (dyn ParticleEffect + 'static)>,
    ) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        let move_duration = self.move_duration;
        let mut completed = false;

        loop {
            let step = run.steps[run.active.index];

            if !run.active.entered {
                run.active.entered = true;
                match step {
                    Step::Move { part, target } => {
                        run.active.move_start = parts.get(part).map(|part| part.position());
                        debug!(%part, ?target, "move step entered");
                    }
                    Step::ParticlePulse { .. } => {
                        if let Some(particles) = particles.as_deref_mut() {
                            particles.play();
                            run.active.pulse_live = true;
                        }
                    }
                    Step::Wait { .. } => {}
                }
            }

            let outcome = match step {
                Step::Move { part, target } => {
                    match (run.active.move_start, parts.get_mut(part)) {
                        (Some(start), Some(part)) => {
                            if move_duration <= 0.0 {
                                part.set_position(target);
                                StepOutcome::Immediate
                            } else {
                                run.active.elapsed += delta_time;
                                if run.active.elapsed >= move_duration {
                                    // Snap to the exact target on the final
                                    // tick so variable frame timing never
                                    // leaves interpolation residue.
                                    part.set_position(target);
                                    StepOutcome::Finished
                                } else {
                                    let n = (run.active.elapsed / move_duration).clamp(0.0, 1.0);
                                    part.set_position(Vec3::interpolate(start, target, n));
                                    StepOutcome::InProgress
                                }
                            }
                        }
                        // The part reference is absent; skip without stalling.
                        _ => StepOutcome::Immediate,
                    }
                }

                Step::Wait { duration } => {
                    advance_timer(&mut run.active.elapsed, delta_time, duration)
                }

                Step::ParticlePulse { duration } => {
                    if run.active.pulse_live {
                        advance_timer(&mut run.active.elapsed, delta_time, duration)
                    } else {
                        StepOutcome::Immediate
                    }
                }
            };

            if matches!(outcome, StepOutcome::InProgress) {
                break;
            }

            if run.active.pulse_live {
                if let Some(particles) = particles.as_deref_mut() {
                    particles.stop();
                }
            }

            debug!(step = run.active.index + 1, "step complete");

            let next = run.active.index + 1;
            if next < run.steps.len() {
                run.active = ActiveStep::at(next);
            } else {
                run.cycles_left -= 1;
                if run.cycles_left == 0 {
                    completed = true;
                    break;
                }
                run.active = ActiveStep::at(0);
            }

            if matches!(outcome, StepOutcome::Finished) {
                break;
            }
        }

        if completed {
            self.run = None;
            info!("Soldering sequence complete");
            for callback in &mut self.on_complete {
                callback();
            }
        }
    }
}

fn advance_timer(elapsed: &mut f32, delta_time: f32, duration: f32) -> StepOutcome {
    if duration <= 0.0 {
        return StepOutcome::Immediate;
    }

    *elapsed += delta_time;
    if *elapsed >= duration {
        StepOutcome::Finished
    } else {
        StepOutcome::InProgress
    }
}
