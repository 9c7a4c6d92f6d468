//! Core domain entities for Sprout.
//!
//! A [`Plant`] is the only record the system tracks. Its room, light and water amount are each
//! drawn from a fixed option set, represented here as enums whose display strings are
//! also their persisted form.

mod options;
mod plant;

pub use options::{Light, Room, WaterAmount};
pub use plant::{Plant, PlantFields, PlantId};
