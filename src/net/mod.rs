//! Net connectivity model.
//!
//! A [`Net`] is one named connection point in a device block. It records at
//! most one driver (its source) and any number of consumers (its sinks).
//! Both relationships are stored as [`NetId`] handles, never as owned nets;
//! the owning [`Block`](crate::block::Block) resolves them.
//!
//! The wiring mutators on [`Net`] are deliberately raw: they touch one side
//! of an edge only. Use [`Block::connect`](crate::block::Block::connect) to
//! wire both sides at once.

mod record;
mod render;
mod types;

pub use record::Net;
pub use render::{describe, NetDisplay, NetLookup, NULL_SOURCE};
pub use types::NetId;
