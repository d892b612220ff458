//! Blocks: the containers that own nets.
//!
//! A [`Block`] holds its nets in an arena keyed by [`NetId`](crate::net::NetId)
//! and is the only place where graph-wide rules are enforced: unique names,
//! both-sided wiring through [`Block::connect`], and optionally acyclicity.
//! [`validate_block`] re-checks those rules after raw edits.

mod config;
mod graph;
mod validate;

pub use config::BlockConfig;
pub use graph::{Block, DEFAULT_BLOCK_NAME};
pub use validate::validate_block;
