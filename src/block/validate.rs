//! Block validation.

use std::collections::HashSet;

use crate::error::{NetgraphError, Result};

use super::Block;

/// Validate the structure of a block.
///
/// Checks:
/// - Net names are unique
/// - Every source and sink handle belongs to the block
/// - No net drives itself
/// - Every edge is recorded on both sides
/// - The graph is acyclic, if the block's config rejects cycles
pub fn validate_block(block: &Block) -> Result<()> {
    let mut names = HashSet::new();
    for net in block.nets() {
        if !names.insert(net.name()) {
            return Err(NetgraphError::duplicate_net(net.name(), block.name()));
        }
    }

    for net in block.nets() {
        let id = net.id();

        if let Some(source) = net.source() {
            if source == id {
                return Err(NetgraphError::SelfLoop {
                    net: net.name().to_string(),
                });
            }
            let driver = block.net(source).ok_or_else(|| NetgraphError::DanglingReference {
                net: net.name().to_string(),
                id: source,
            })?;
            if !driver.drives(id) {
                return Err(NetgraphError::asymmetric_edge(
                    driver.name(),
                    net.name(),
                    "sink records the source, source does not list the sink",
                ));
            }
        }

        for &sink in net.sinks() {
            if sink == id {
                return Err(NetgraphError::SelfLoop {
                    net: net.name().to_string(),
                });
            }
            let consumer = block.net(sink).ok_or_else(|| NetgraphError::DanglingReference {
                net: net.name().to_string(),
                id: sink,
            })?;
            if consumer.source() != Some(id) {
                return Err(NetgraphError::asymmetric_edge(
                    net.name(),
                    consumer.name(),
                    "source lists the sink, sink is driven by another net",
                ));
            }
        }
    }

    if block.config().reject_cycles {
        if let Some(id) = block.find_cycle() {
            let name = block.name_of(id);
            return Err(NetgraphError::CycleDetected {
                source_net: name.clone(),
                sink: name,
            });
        }
    }

    Ok(())
}
