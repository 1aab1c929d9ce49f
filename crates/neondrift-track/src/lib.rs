//! Track vocabulary: segment templates and self-management triggers.
//!
//! Pure functions and plain data — no ECS dependency. The sim crate drives
//! these against live segment entities each tick.

pub mod catalog;
pub mod triggers;

#[cfg(test)]
mod tests;
