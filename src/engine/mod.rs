pub mod animator;
pub mod phase;
pub mod surface;
pub mod trail;
