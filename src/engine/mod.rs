pub mod input;
pub mod scene;

pub mod prelude {
    pub use super::input::*;
    pub use super::scene::*;
    pub use glam::Vec3;
}
