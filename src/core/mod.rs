pub mod body;
pub mod body_set;
pub mod world_state;

pub use body::{Body, BodyId, BodyKind, well_radius};
pub use body_set::BodySet;
pub use world_state::{WorldState, log_world_summary};
