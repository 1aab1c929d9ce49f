//! Minimal rigid-body services consumed by the simulation core:
//! force integration, downward raycasts against track surface strips,
//! and contact detection with discrete collision events.
//!
//! This is deliberately not a general physics engine — no narrow-phase
//! shapes, no constraint solver. The craft is the only dynamic body and the
//! track is a set of axis-aligned horizontal strips.

pub mod body;
pub mod contact;
pub mod raycast;

pub use body::integrate;
pub use contact::{resolve_surface_contacts, ContactEvent};
pub use raycast::{raycast_down, RayHit, SurfaceStrip};

#[cfg(test)]
mod tests;
