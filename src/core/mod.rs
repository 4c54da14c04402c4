//! Low-level board primitives.
//!
//! Every search touches these types once per generated state, so they stay small, `Copy` where
//! possible and cheap to hash:
//!
//! - [`coord`]: board dimension, cells and the in-bounds predicate.
//! - [`vehicle`]: orientation, vehicle placement and derived occupied cells.
//! - [`occupancy`]: cell -> vehicle index grid rebuilt per configuration.
//! - [`configuration`]: the ordered vehicle list that identifies a puzzle state.

pub mod configuration;
pub mod coord;
pub mod occupancy;
pub mod vehicle;
