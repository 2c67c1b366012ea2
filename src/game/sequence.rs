use glam::Vec3;

use super::{config::StationConfig, part::PartId};

/// How long the solder pulse runs and how long the machine rests afterwards.
pub const SOLDER_PULSE_SECONDS: f32 = 1.0;

/// One entry of the choreography.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Interpolate a part from wherever it currently is to `target` over the
    /// shared move duration.
    Move { part: PartId, target: Vec3 },
    /// Hold everything in place.
    Wait { duration: f32 },
    /// Play the particle effect, hold, then stop it. Skipped entirely when
    /// no effect is attached.
    ParticlePulse { duration: f32 },
}

/// Build the fixed 12-step cycle from the tunables and the original positions
/// captured at startup. The order is hard-coded; only the offsets come from
/// the config.
pub fn soldering_cycle(
    config: &StationConfig,
    carriage_origin: Vec3,
    head_origin: Vec3,
) -> Vec<Step> {
    vec![
        // Carriage brings the board in under the head.
        Step::Move {
            part: PartId::Carriage,
            target: Vec3::new(carriage_origin.x, carriage_origin.y, config.carriage_z_target),
        },
        // Head lifts clear.
        Step::Move {
            part: PartId::Head,
            target: Vec3::new(head_origin.x, config.head_y_target, head_origin.z),
        },
        Step::Wait {
            duration: config.wait_between_steps,
        },
        // Head settles back down.
        Step::Move {
            part: PartId::Head,
            target: head_origin,
        },
        // Head shifts over the joint.
        Step::Move {
            part: PartId::Head,
            target: Vec3::new(config.head_x_target, head_origin.y, head_origin.z),
        },
        Step::Move {
            part: PartId::Head,
            target: Vec3::new(config.head_x_target, config.head_y_second_target, head_origin.z),
        },
        // The actual solder moment.
        Step::ParticlePulse {
            duration: SOLDER_PULSE_SECONDS,
        },
        Step::Wait {
            duration: SOLDER_PULSE_SECONDS,
        },
        // Retract: undo the X shift, then return both parts home.
        Step::Move {
            part: PartId::Head,
            target: Vec3::new(config.head_x_target, head_origin.y, head_origin.z),
        },
        Step::Wait {
            duration: config.wait_between_steps,
        },
        Step::Move {
            part: PartId::Head,
            target: head_origin,
        },
        Step::Move {
            part: PartId::Carriage,
            target: carriage_origin,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_twelve_steps_in_order() {
        let config = StationConfig::default();
        let steps = soldering_cycle(&config, Vec3::ZERO, Vec3::ZERO);

        assert_eq!(steps.len(), 12);
        assert_eq!(
            steps[0],
            Step::Move {
                part: PartId::Carriage,
                target: Vec3::new(0.0, 0.0, 2.0),
            }
        );
        assert_eq!(
            steps[5],
            Step::Move {
                part: PartId::Head,
                target: Vec3::new(1.0, 3.0, 0.0),
            }
        );
        assert!(matches!(steps[6], Step::ParticlePulse { .. }));
        assert_eq!(
            steps[11],
            Step::Move {
                part: PartId::Carriage,
                target: Vec3::ZERO,
            }
        );
    }

    #[test]
    fn cycle_targets_keep_origin_components() {
        let config = StationConfig::default();
        let carriage_origin = Vec3::new(5.0, 6.0, 7.0);
        let head_origin = Vec3::new(-1.0, -2.0, -3.0);
        let steps = soldering_cycle(&config, carriage_origin, head_origin);

        // The carriage only ever changes Z.
        assert_eq!(
            steps[0],
            Step::Move {
                part: PartId::Carriage,
                target: Vec3::new(5.0, 6.0, 2.0),
            }
        );
        // The first head move only changes Y.
        assert_eq!(
            steps[1],
            Step::Move {
                part: PartId::Head,
                target: Vec3::new(-1.0, 2.0, -3.0),
            }
        );
    }
}
