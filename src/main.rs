use std::{cell::Cell, path::PathBuf, rc::Rc};

use clap::Parser;
use tracing::{info, warn};

mod engine;
mod game;

use engine::prelude::*;
use game::{
    config::{ConfigError, StationConfig},
    effects::{ParticleEffect, Tooltip},
    part::{MovablePart, StationParts},
    station::SolderStation,
};

#[derive(clap::Parser)]
struct Opts {
    /// Path to a TOML file overriding the station tunables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated frame time in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    delta: f32,

    /// Bail out after this many ticks if the sequence never completes.
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
}

/// Particle effect that only reports to the log. A real host would drive a
/// particle renderer here.
struct LogParticles;

impl ParticleEffect for LogParticles {
    fn play(&mut self) {
        info!("solder sparks: play");
    }

    fn stop(&mut self) {
        info!("solder sparks: stop");
    }
}

struct LogTooltip;

impl Tooltip for LogTooltip {
    fn set_visible(&mut self, visible: bool) {
        info!(visible, "tooltip");
    }
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt().init();

    let opts = Opts::parse();

    let config = match &opts.config {
        Some(path) => StationConfig::from_toml_file(path)?,
        None => StationConfig::default(),
    };
    config.validate()?;

    let parts = StationParts {
        carriage: Some(MovablePart::new(Vec3::ZERO)),
        head: Some(MovablePart::new(Vec3::ZERO)),
    };

    let mut station = SolderStation::new(config, parts)
        .with_particles(LogParticles)
        .with_tooltip(LogTooltip);

    let done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&done);
    station.observe_completion(move || flag.set(true));

    // Script the host side: aim at the machine and press select once, then
    // keep ticking until the sequence reports completion.
    let mut input = InputState::default();
    station.event(&SceneEvent::HoverEntered);
    input.press(Action::Select);

    let mut ticks = 0u64;
    while !done.get() && ticks < opts.max_ticks {
        station.update(opts.delta, &input);
        input.reset_current_frame();
        if ticks == 0 {
            input.release(Action::Select);
        }
        ticks += 1;
    }

    station.event(&SceneEvent::HoverExited);

    if done.get() {
        let carriage = station.parts().carriage.map(|part| part.position());
        let head = station.parts().head.map(|part| part.position());
        info!(ticks, ?carriage, ?head, "soldering sequence finished");
    } else {
        warn!(ticks, state = %station.state(), "bailed out before completion");
    }

    Ok(())
}
