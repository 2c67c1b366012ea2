/// Host-rendered particle system attached to the solder head.
pub trait ParticleEffect {
    fn play(&mut self);
    fn stop(&mut self);
}

/// Host UI hint shown next to the machine until it is first used.
pub trait Tooltip {
    fn set_visible(&mut self, visible: bool);
}
