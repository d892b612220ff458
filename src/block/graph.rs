//! Block structure: the arena that owns nets and wires them.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, trace, warn};

use super::config::BlockConfig;
use crate::dsl::NetlistAst;
use crate::error::{NetgraphError, Result};
use crate::net::{Net, NetId, NetLookup};

/// Name used for blocks built from a netlist without a `.block` line.
pub const DEFAULT_BLOCK_NAME: &str = "top";

/// A functional block owning a set of uniquely named nets.
#[derive(Debug)]
pub struct Block {
    /// Block name (used in error messages)
    name: String,

    /// Wiring policy
    config: BlockConfig,

    /// All nets, keyed by handle
    nets: HashMap<NetId, Net>,

    /// Insertion order of handles
    order: Vec<NetId>,

    /// Name index, authoritative unless `names_dirty` is set
    name_map: HashMap<String, NetId>,

    /// Set by `net_mut`, which can rename behind the index's back.
    /// Cleared by the next `&mut self` call that needs the index.
    names_dirty: bool,
}

impl Block {
    /// Create an empty block with the default wiring policy.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, BlockConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: BlockConfig) -> Self {
        Self {
            name: name.into(),
            config,
            nets: HashMap::new(),
            order: Vec::new(),
            name_map: HashMap::new(),
            names_dirty: false,
        }
    }

    /// Build a block from a parsed netlist.
    pub fn from_ast(ast: NetlistAst, config: BlockConfig) -> Result<Self> {
        let name = ast
            .block_name
            .unwrap_or_else(|| DEFAULT_BLOCK_NAME.to_string());
        let mut block = Block::with_config(name, config);

        for def in ast.nets {
            if block.find(&def.name).is_some() {
                return Err(NetgraphError::DuplicateDeclaration {
                    name: def.name,
                    line: def.line,
                });
            }
            block.add_net(def.name, def.signal)?;
        }

        for conn in &ast.connections {
            let source = block.find(&conn.source).ok_or_else(|| NetgraphError::UndeclaredNet {
                name: conn.source.clone(),
                line: conn.line,
            })?;
            for sink_name in &conn.sinks {
                let sink = block.find(sink_name).ok_or_else(|| NetgraphError::UndeclaredNet {
                    name: sink_name.clone(),
                    line: conn.line,
                })?;
                block.connect(source, sink)?;
            }
        }

        debug!(block = %block.name, nets = block.len(), "built block from netlist");
        Ok(block)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> BlockConfig {
        self.config
    }

    /// Number of nets in the block.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Create a net and add it to the block.
    pub fn add_net(
        &mut self,
        name: impl Into<String>,
        signal_name: impl Into<String>,
    ) -> Result<NetId> {
        let name = name.into();
        self.reindex_names();
        if self.find(&name).is_some() {
            return Err(NetgraphError::duplicate_net(name, &self.name));
        }
        self.insert_net(Net::new(name, signal_name))
    }

    /// Adopt an existing net, keeping whatever handles it already records.
    pub fn insert_net(&mut self, net: Net) -> Result<NetId> {
        self.reindex_names();
        if self.find(net.name()).is_some() {
            return Err(NetgraphError::duplicate_net(net.name(), &self.name));
        }

        let id = net.id();
        trace!(block = %self.name, net = %net.name(), %id, "adding net");
        self.name_map.insert(net.name().to_string(), id);
        self.order.push(id);
        self.nets.insert(id, net);
        Ok(id)
    }

    pub fn net(&self, id: NetId) -> Option<&Net> {
        self.nets.get(&id)
    }

    /// Raw access to a net's mutators.
    ///
    /// Wiring done here touches one side of an edge only; run
    /// [`validate_block`](super::validate_block) afterwards.
    pub fn net_mut(&mut self, id: NetId) -> Option<&mut Net> {
        let net = self.nets.get_mut(&id)?;
        self.names_dirty = true;
        Some(net)
    }

    /// Find a net handle by name.
    ///
    /// Constant time, except after `net_mut` and before the next block
    /// mutation, when it falls back to a scan.
    pub fn find(&self, name: &str) -> Option<NetId> {
        if self.names_dirty {
            return self
                .nets()
                .find(|net| net.name() == name)
                .map(|net| net.id());
        }
        self.name_map.get(name).copied()
    }

    /// Rebuild the name index if raw access may have invalidated it.
    /// On duplicate names the earliest net keeps the entry.
    fn reindex_names(&mut self) {
        if !self.names_dirty {
            return;
        }
        trace!(block = %self.name, "rebuilding name index");
        let mut name_map = HashMap::with_capacity(self.order.len());
        for net in self.nets() {
            name_map.entry(net.name().to_string()).or_insert(net.id());
        }
        self.name_map = name_map;
        self.names_dirty = false;
    }

    pub fn net_by_name(&self, name: &str) -> Option<&Net> {
        self.find(name).and_then(|id| self.net(id))
    }

    /// Nets in insertion order.
    pub fn nets(&self) -> impl Iterator<Item = &Net> {
        self.order.iter().filter_map(|id| self.nets.get(id))
    }

    /// Handles in insertion order.
    pub fn ids(&self) -> &[NetId] {
        &self.order
    }

    pub fn contains(&self, id: NetId) -> bool {
        self.nets.contains_key(&id)
    }

    /// Rename a net, keeping names unique within the block.
    pub fn rename_net(&mut self, id: NetId, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        self.reindex_names();
        let old_name = self.require(id)?.name().to_string();
        if let Some(other) = self.find(&new_name) {
            if other != id {
                return Err(NetgraphError::duplicate_net(new_name, &self.name));
            }
            return Ok(());
        }

        if self.name_map.get(&old_name) == Some(&id) {
            self.name_map.remove(&old_name);
        }
        self.name_map.insert(new_name.clone(), id);
        if let Some(net) = self.nets.get_mut(&id) {
            net.set_name(new_name);
        }
        Ok(())
    }

    pub fn set_signal(&mut self, id: NetId, signal_name: impl Into<String>) -> Result<()> {
        self.require_mut(id)?.set_signal_name(signal_name);
        Ok(())
    }

    /// Wire `source` to drive `sink`, updating both sides of the edge.
    ///
    /// If the sink was driven by another net, it is first removed from that
    /// net's sink set (or the call fails when rewiring is disabled). Nothing
    /// is modified when an error is returned.
    pub fn connect(&mut self, source: NetId, sink: NetId) -> Result<()> {
        self.require(source)?;
        let previous = self.require(sink)?.source();

        if source == sink {
            return Err(NetgraphError::SelfLoop {
                net: self.name_of(sink),
            });
        }

        if let Some(previous) = previous.filter(|p| *p != source) {
            if !self.config.allow_rewire {
                return Err(NetgraphError::AlreadyDriven {
                    net: self.name_of(sink),
                    source_net: self.name_of(previous),
                });
            }
        }

        if self.config.reject_cycles && self.would_create_cycle(source, sink) {
            return Err(NetgraphError::CycleDetected {
                source_net: self.name_of(source),
                sink: self.name_of(sink),
            });
        }

        if let Some(previous) = previous.filter(|p| *p != source) {
            warn!(
                block = %self.name,
                sink = %self.name_of(sink),
                from = %self.name_of(previous),
                to = %self.name_of(source),
                "rewiring driven net"
            );
            if let Some(prev) = self.nets.get_mut(&previous) {
                prev.remove_sink(sink);
            }
        }

        debug!(
            block = %self.name,
            source = %self.name_of(source),
            sink = %self.name_of(sink),
            "connecting nets"
        );
        if let Some(net) = self.nets.get_mut(&sink) {
            net.set_source(source);
        }
        if let Some(net) = self.nets.get_mut(&source) {
            net.add_sink(sink);
        }
        Ok(())
    }

    /// Remove the edge driving `sink`, on both sides. Returns the old source.
    pub fn disconnect(&mut self, sink: NetId) -> Result<Option<NetId>> {
        let previous = self.require_mut(sink)?.clear_source();
        if let Some(previous) = previous {
            debug!(block = %self.name, sink = %self.name_of(sink), "disconnecting net");
            if let Some(prev) = self.nets.get_mut(&previous) {
                prev.remove_sink(sink);
            }
        }
        Ok(previous)
    }

    /// Remove a net and every handle that refers to it.
    ///
    /// The returned net is detached: no source, no sinks.
    pub fn remove_net(&mut self, id: NetId) -> Result<Net> {
        self.reindex_names();
        let mut net = self.nets.remove(&id).ok_or_else(|| self.unknown(id))?;
        self.order.retain(|other| *other != id);
        if self.name_map.get(net.name()) == Some(&id) {
            self.name_map.remove(net.name());
            // a raw rename may have left another net under the same name
            let other = self.nets().find(|other| other.name() == net.name()).map(|other| other.id());
            if let Some(other) = other {
                self.name_map.insert(net.name().to_string(), other);
            }
        }

        // raw wiring may have left one-sided edges, so sweep everything
        for other in self.nets.values_mut() {
            other.remove_sink(id);
            if other.source() == Some(id) {
                other.clear_source();
            }
        }

        net.clear_source();
        net.clear_sinks();
        debug!(block = %self.name, net = %net.name(), "removed net");
        Ok(net)
    }

    /// Add an unwired copy of a net under a new name.
    pub fn duplicate_net(&mut self, id: NetId, new_name: impl Into<String>) -> Result<NetId> {
        let new_name = new_name.into();
        if self.find(&new_name).is_some() {
            return Err(NetgraphError::duplicate_net(new_name, &self.name));
        }
        let mut copy = self.require(id)?.duplicate();
        copy.set_name(new_name);
        self.insert_net(copy)
    }

    /// Nets without a driver (block inputs, or unfinished wiring).
    pub fn undriven(&self) -> Vec<NetId> {
        self.nets()
            .filter(|net| !net.is_driven())
            .map(|net| net.id())
            .collect()
    }

    /// Nets carrying the given logical signal.
    pub fn nets_for_signal(&self, signal_name: &str) -> Vec<NetId> {
        self.nets()
            .filter(|net| net.signal_name() == signal_name)
            .map(|net| net.id())
            .collect()
    }

    /// All nets transitively driven by `id`.
    ///
    /// `id` itself is only included if it sits on a cycle.
    pub fn reachable_from(&self, id: NetId) -> BTreeSet<NetId> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<NetId> = self
            .net(id)
            .map(|net| net.sinks().iter().copied().collect())
            .unwrap_or_default();

        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            if let Some(net) = self.net(current) {
                stack.extend(net.sinks().iter().filter(|s| !seen.contains(*s)));
            }
        }
        seen
    }

    /// Whether adding the edge `source -> sink` would close a loop.
    pub fn would_create_cycle(&self, source: NetId, sink: NetId) -> bool {
        source == sink || self.reachable_from(sink).contains(&source)
    }

    /// Whether the source-to-sink graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// A net lying on some cycle, if there is one.
    pub fn find_cycle(&self) -> Option<NetId> {
        let mut done: HashSet<NetId> = HashSet::new();
        for &start in &self.order {
            if done.contains(&start) {
                continue;
            }
            // iterative DFS with an explicit "on stack" set
            let mut on_path: HashSet<NetId> = HashSet::new();
            let mut stack: Vec<(NetId, Vec<NetId>)> = vec![(start, self.sink_list(start))];
            on_path.insert(start);

            while let Some((node, pending)) = stack.last_mut() {
                match pending.pop() {
                    Some(next) => {
                        if on_path.contains(&next) {
                            return Some(next);
                        }
                        if !done.contains(&next) && self.contains(next) {
                            on_path.insert(next);
                            let sinks = self.sink_list(next);
                            stack.push((next, sinks));
                        }
                    }
                    None => {
                        let node = *node;
                        on_path.remove(&node);
                        done.insert(node);
                        stack.pop();
                    }
                }
            }
        }
        None
    }

    /// Rendering of one net, with names resolved inside this block.
    pub fn render(&self, id: NetId) -> Option<String> {
        self.net(id).map(|net| net.to_display_string(self))
    }

    /// Name of a net, or its handle if it is not in this block.
    pub fn name_of(&self, id: NetId) -> String {
        match self.net(id) {
            Some(net) => net.name().to_string(),
            None => id.to_string(),
        }
    }

    fn sink_list(&self, id: NetId) -> Vec<NetId> {
        self.net(id)
            .map(|net| net.sinks().iter().copied().collect())
            .unwrap_or_default()
    }

    fn unknown(&self, id: NetId) -> NetgraphError {
        NetgraphError::UnknownNet {
            id,
            block: self.name.clone(),
        }
    }

    fn require(&self, id: NetId) -> Result<&Net> {
        self.nets.get(&id).ok_or_else(|| self.unknown(id))
    }

    fn require_mut(&mut self, id: NetId) -> Result<&mut Net> {
        let err = self.unknown(id);
        self.nets.get_mut(&id).ok_or(err)
    }
}

impl NetLookup for Block {
    fn lookup(&self, id: NetId) -> Option<&Net> {
        self.net(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc(config: BlockConfig) -> (Block, NetId, NetId, NetId) {
        let mut block = Block::with_config("blk", config);
        let a = block.add_net("A", "s").unwrap();
        let b = block.add_net("B", "s").unwrap();
        let c = block.add_net("C", "s").unwrap();
        (block, a, b, c)
    }

    #[test]
    fn test_add_and_find() {
        let (block, a, b, _) = abc(BlockConfig::default());
        assert_eq!(block.len(), 3);
        assert_eq!(block.find("A"), Some(a));
        assert_eq!(block.net_by_name("B").map(|n| n.id()), Some(b));
        assert_eq!(block.find("missing"), None);
        let names: Vec<&str> = block.nets().map(|n| n.name()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let (mut block, _, _, _) = abc(BlockConfig::default());
        let err = block.add_net("A", "other").unwrap_err();
        assert!(matches!(err, NetgraphError::DuplicateNet { ref name, .. } if name == "A"));
        assert!(block.insert_net(Net::new("B", "s")).is_err());
        assert_eq!(block.len(), 3);
    }

    #[test]
    fn test_connect_updates_both_sides() {
        let (mut block, a, b, c) = abc(BlockConfig::default());
        block.connect(a, b).unwrap();
        block.connect(a, c).unwrap();

        let expected: BTreeSet<NetId> = [b, c].into_iter().collect();
        assert_eq!(block.net(a).unwrap().sinks(), &expected);
        assert_eq!(block.net(b).unwrap().source(), Some(a));
        assert_eq!(block.net(c).unwrap().source(), Some(a));
        assert_eq!(block.net(a).unwrap().source(), None);
        assert_eq!(block.undriven(), vec![a]);
    }

    #[test]
    fn test_connect_twice_is_noop() {
        let (mut block, a, b, _) = abc(BlockConfig::default());
        block.connect(a, b).unwrap();
        block.connect(a, b).unwrap();
        assert_eq!(block.net(a).unwrap().fanout(), 1);
    }

    #[test]
    fn test_connect_rejects_self_loop() {
        let (mut block, a, _, _) = abc(BlockConfig::default());
        let err = block.connect(a, a).unwrap_err();
        assert!(matches!(err, NetgraphError::SelfLoop { .. }));
        assert!(!block.net(a).unwrap().is_driven());
    }

    #[test]
    fn test_connect_rejects_foreign_handle() {
        let (mut block, a, _, _) = abc(BlockConfig::default());
        let stray = Net::new("stray", "s");
        let err = block.connect(a, stray.id()).unwrap_err();
        assert!(matches!(err, NetgraphError::UnknownNet { id, .. } if id == stray.id()));
        assert_eq!(block.net(a).unwrap().fanout(), 0);
    }

    #[test]
    fn test_rewire_moves_sink() {
        let (mut block, a, b, c) = abc(BlockConfig::default());
        block.connect(a, c).unwrap();
        block.connect(b, c).unwrap();
        assert_eq!(block.net(c).unwrap().source(), Some(b));
        assert!(!block.net(a).unwrap().drives(c));
        assert!(block.net(b).unwrap().drives(c));
    }

    #[test]
    fn test_rewire_disabled() {
        let (mut block, a, b, c) = abc(BlockConfig::new().with_allow_rewire(false));
        block.connect(a, c).unwrap();
        let err = block.connect(b, c).unwrap_err();
        assert!(matches!(
            err,
            NetgraphError::AlreadyDriven { ref net, ref source_net } if net == "C" && source_net == "A"
        ));
        assert_eq!(block.net(c).unwrap().source(), Some(a));
        assert_eq!(block.net(b).unwrap().fanout(), 0);
        // reconnecting the same driver is still fine
        block.connect(a, c).unwrap();
    }

    #[test]
    fn test_cycles_allowed_by_default() {
        let (mut block, a, b, c) = abc(BlockConfig::default());
        block.connect(a, b).unwrap();
        block.connect(b, c).unwrap();
        assert!(!block.has_cycle());
        block.connect(c, a).unwrap();
        assert!(block.has_cycle());
        assert!(block.find_cycle().is_some());
        assert!(block.reachable_from(a).contains(&a));
    }

    #[test]
    fn test_cycles_rejected_when_configured() {
        let (mut block, a, b, c) = abc(BlockConfig::new().with_reject_cycles(true));
        block.connect(a, b).unwrap();
        block.connect(b, c).unwrap();
        assert!(block.would_create_cycle(c, a));
        let err = block.connect(c, a).unwrap_err();
        assert!(matches!(err, NetgraphError::CycleDetected { .. }));
        assert!(!block.net(a).unwrap().is_driven());
        assert!(!block.has_cycle());
    }

    #[test]
    fn test_disconnect() {
        let (mut block, a, b, _) = abc(BlockConfig::default());
        block.connect(a, b).unwrap();
        assert_eq!(block.disconnect(b).unwrap(), Some(a));
        assert!(block.net(a).unwrap().sinks().is_empty());
        assert_eq!(block.disconnect(b).unwrap(), None);
    }

    #[test]
    fn test_remove_net_clears_references() {
        let (mut block, a, b, c) = abc(BlockConfig::default());
        block.connect(a, b).unwrap();
        block.connect(b, c).unwrap();

        let removed = block.remove_net(b).unwrap();
        assert_eq!(removed.name(), "B");
        assert!(!removed.is_driven());
        assert!(removed.sinks().is_empty());

        assert_eq!(block.len(), 2);
        assert_eq!(block.find("B"), None);
        assert!(block.net(a).unwrap().sinks().is_empty());
        assert!(!block.net(c).unwrap().is_driven());
        assert!(block.remove_net(b).is_err());
    }

    #[test]
    fn test_rename() {
        let (mut block, a, b, _) = abc(BlockConfig::default());
        block.rename_net(a, "A2").unwrap();
        assert_eq!(block.find("A2"), Some(a));
        assert_eq!(block.find("A"), None);
        assert!(block.rename_net(a, "B").is_err());
        block.rename_net(b, "B").unwrap();
        // old name can be reused
        block.add_net("A", "s").unwrap();
    }

    #[test]
    fn test_find_survives_raw_rename() {
        let (mut block, a, _, _) = abc(BlockConfig::default());
        block.net_mut(a).unwrap().set_name("Z");
        assert!(block.names_dirty);
        assert_eq!(block.find("Z"), Some(a));
        assert_eq!(block.find("A"), None);

        let fresh = block.add_net("A", "s").unwrap();
        assert!(!block.names_dirty);
        assert_eq!(block.name_map.get("Z"), Some(&a));
        assert_eq!(block.find("A"), Some(fresh));
        assert!(block.add_net("Z", "s").is_err());
    }

    #[test]
    fn test_remove_net_reindexes_shared_name() {
        let (mut block, a, b, _) = abc(BlockConfig::default());
        block.net_mut(b).unwrap().set_name("A");
        block.remove_net(a).unwrap();
        assert!(!block.names_dirty);
        assert_eq!(block.find("A"), Some(b));
    }

    #[test]
    fn test_net_mut_on_missing_handle_keeps_index_clean() {
        let (mut block, _, _, _) = abc(BlockConfig::default());
        let stray = Net::new("stray", "s");
        assert!(block.net_mut(stray.id()).is_none());
        assert!(!block.names_dirty);
    }

    #[test]
    fn test_add_net_scales_linearly() {
        use std::time::{Duration, Instant};

        const COUNT: usize = 50_000;
        let started = Instant::now();
        let mut block = Block::new("big");
        for i in 0..COUNT {
            block.add_net(format!("n{}", i), "s").unwrap();
        }
        let elapsed = started.elapsed();

        assert_eq!(block.len(), COUNT);
        assert!(!block.names_dirty);
        assert_eq!(block.find("n49999"), Some(block.ids()[COUNT - 1]));
        // a scan per insert would take minutes at this size
        assert!(
            elapsed < Duration::from_secs(10),
            "adding {} nets took {:?}",
            COUNT,
            elapsed
        );
    }

    #[test]
    fn test_duplicate_net() {
        let (mut block, a, b, _) = abc(BlockConfig::default());
        block.connect(a, b).unwrap();
        let copy = block.duplicate_net(b, "B_copy").unwrap();
        let net = block.net(copy).unwrap();
        assert_eq!(net.signal_name(), "s");
        assert!(!net.is_driven());
        assert_ne!(copy, b);
        assert!(block.duplicate_net(b, "A").is_err());
    }

    #[test]
    fn test_signal_queries() {
        let (mut block, a, b, c) = abc(BlockConfig::default());
        block.set_signal(c, "t").unwrap();
        assert_eq!(block.nets_for_signal("s"), vec![a, b]);
        assert_eq!(block.nets_for_signal("t"), vec![c]);
    }

    #[test]
    fn test_from_ast() {
        let ast = crate::dsl::parse(
            ".block io\n.net pad\n.net pad_buf pad\n.net core_a pad\n.net core_b pad\n\
             .connect pad pad_buf\n.connect pad_buf core_a core_b\n",
        )
        .unwrap();
        let block = Block::from_ast(ast, BlockConfig::strict()).unwrap();

        assert_eq!(block.name(), "io");
        assert_eq!(block.len(), 4);
        let pad = block.find("pad").unwrap();
        let buf = block.find("pad_buf").unwrap();
        assert_eq!(block.undriven(), vec![pad]);
        assert_eq!(block.net(buf).unwrap().fanout(), 2);
        assert_eq!(block.nets_for_signal("pad").len(), 4);
        assert_eq!(
            block.reachable_from(pad).len(),
            3,
            "pad reaches the buffer and both core nets"
        );
    }

    #[test]
    fn test_from_ast_defaults_and_errors() {
        let ast = crate::dsl::parse(".net a").unwrap();
        let block = Block::from_ast(ast, BlockConfig::default()).unwrap();
        assert_eq!(block.name(), DEFAULT_BLOCK_NAME);

        let ast = crate::dsl::parse(".net a\n.connect a b").unwrap();
        let err = Block::from_ast(ast, BlockConfig::default()).unwrap_err();
        assert!(matches!(err, NetgraphError::UndeclaredNet { ref name, line: 2 } if name == "b"));

        let ast = crate::dsl::parse(".net a\n.net b\n.net a").unwrap();
        let err = Block::from_ast(ast, BlockConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            NetgraphError::DuplicateDeclaration { ref name, line: 3 } if name == "a"
        ));

        let ast = crate::dsl::parse(".net a\n.net b\n.connect a b\n.connect b a").unwrap();
        assert!(Block::from_ast(ast.clone(), BlockConfig::default()).is_ok());
        assert!(matches!(
            Block::from_ast(ast, BlockConfig::strict()).unwrap_err(),
            NetgraphError::CycleDetected { .. }
        ));
    }

    #[test]
    fn test_render_resolves_names() {
        let (mut block, a, b, c) = abc(BlockConfig::default());
        block.connect(a, b).unwrap();
        block.connect(a, c).unwrap();
        assert_eq!(
            block.render(a).unwrap(),
            "Net Name: A\nSignal Name: s\nSource: null\nSinks: B C"
        );
        assert_eq!(
            block.render(b).unwrap(),
            "Net Name: B\nSignal Name: s\nSource: A\nSinks: "
        );
    }
}
