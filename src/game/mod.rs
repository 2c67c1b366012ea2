pub mod config;
pub mod effects;
pub mod interpolate;
pub mod part;
pub mod sequence;
pub mod sequencer;
pub mod station;

pub use part::{MovablePart, PartId, StationParts};
pub use station::SolderStation;
