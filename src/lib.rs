//! # Netgraph Core
//!
//! Net connectivity model for digital device descriptions.
//!
//! This library provides:
//! - A [`Net`] record: one named signal carrier with a single driver and any
//!   number of consumers
//! - A [`Block`] arena that owns nets and wires both sides of an edge at once
//! - Structural validation of a block's connectivity graph
//! - A small text format for describing a block's nets and wiring
//!
//! ## Architecture
//!
//! - [`net`] - The net record, its handles and its diagnostic rendering
//! - [`block`] - Net ownership, wiring and validation
//! - [`dsl`] - Parser for the netlist description language
//!
//! ## Usage
//!
//! ```
//! use netgraph_core::{Block, BlockConfig};
//!
//! let mut block = Block::with_config("io", BlockConfig::strict());
//! let pad = block.add_net("pad", "din").unwrap();
//! let buf = block.add_net("pad_buf", "din").unwrap();
//! block.connect(pad, buf).unwrap();
//!
//! assert_eq!(block.net(buf).unwrap().source(), Some(pad));
//! assert!(block.net(pad).unwrap().drives(buf));
//! println!("{}", block.render(pad).unwrap());
//! ```
//!
//! ## Identity
//!
//! Nets refer to each other through [`NetId`] handles rather than owning
//! pointers. `==` on two nets compares handles; [`Net::equals`] compares
//! contents.

pub mod block;
pub mod dsl;
pub mod error;
pub mod net;

// Re-export main types for convenience
pub use block::{validate_block, Block, BlockConfig};
pub use error::{NetgraphError, Result};
pub use net::{Net, NetId, NetLookup};
