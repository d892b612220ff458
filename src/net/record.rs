//! The net record.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use tracing::debug;

use super::types::NetId;

/// A named signal carrier inside a block.
///
/// Equality through `==` is identity: two nets are equal only when they
/// carry the same [`NetId`]. Use [`Net::equals`] for structural comparison.
#[derive(Debug)]
pub struct Net {
    id: NetId,
    name: String,
    signal_name: String,
    source: Option<NetId>,
    sinks: BTreeSet<NetId>,
}

impl Net {
    /// Create an undriven net with no sinks.
    ///
    /// Empty names are accepted; uniqueness is checked by the owning block.
    pub fn new(name: impl Into<String>, signal_name: impl Into<String>) -> Self {
        let net = Self {
            id: NetId::next(),
            name: name.into(),
            signal_name: signal_name.into(),
            source: None,
            sinks: BTreeSet::new(),
        };
        debug!(net = %net.name, id = %net.id, "creating net");
        net
    }

    /// Create a new net with the same name and signal but a fresh identity.
    ///
    /// The duplicate is not wired: it has no source and no sinks.
    pub fn duplicate(&self) -> Self {
        Self::new(self.name.clone(), self.signal_name.clone())
    }

    /// Handle identifying this net.
    pub fn id(&self) -> NetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        debug!(id = %self.id, net = %self.name, "setting net name");
    }

    pub fn signal_name(&self) -> &str {
        &self.signal_name
    }

    pub fn set_signal_name(&mut self, signal_name: impl Into<String>) {
        self.signal_name = signal_name.into();
        debug!(net = %self.name, signal = %self.signal_name, "setting signal name");
    }

    /// The driving net, or `None` if undriven.
    pub fn source(&self) -> Option<NetId> {
        self.source
    }

    /// Replace the driver of this net.
    ///
    /// Only this side of the edge is updated: the previous source keeps this
    /// net in its sink set and the new source does not gain it.
    pub fn set_source(&mut self, source: NetId) {
        debug!(net = %self.name, source = %source, "setting source");
        self.source = Some(source);
    }

    /// Consumers of this net, in handle order.
    pub fn sinks(&self) -> &BTreeSet<NetId> {
        &self.sinks
    }

    /// Add a consumer. Returns `false` if it was already present.
    ///
    /// The sink's source is left untouched.
    pub fn add_sink(&mut self, sink: NetId) -> bool {
        let inserted = self.sinks.insert(sink);
        debug!(net = %self.name, sink = %sink, inserted, "adding sink");
        inserted
    }

    pub fn is_driven(&self) -> bool {
        self.source.is_some()
    }

    /// Number of distinct consumers.
    pub fn fanout(&self) -> usize {
        self.sinks.len()
    }

    /// Whether `sink` is one of this net's consumers.
    pub fn drives(&self, sink: NetId) -> bool {
        self.sinks.contains(&sink)
    }

    /// Identity comparison, same as `==`.
    pub fn is_same(&self, other: &Net) -> bool {
        self.id == other.id
    }

    /// Structural comparison.
    ///
    /// Two nets are structurally equal when name, signal name, source handle
    /// and the set of sink handles all match. Identity is ignored.
    pub fn equals(&self, other: &Net) -> bool {
        if self.name != other.name
            || self.signal_name != other.signal_name
            || self.source != other.source
            || self.sinks.len() != other.sinks.len()
        {
            return false;
        }

        self.sinks.iter().all(|sink| other.sinks.contains(sink))
    }

    pub(crate) fn clear_source(&mut self) -> Option<NetId> {
        self.source.take()
    }

    pub(crate) fn remove_sink(&mut self, sink: NetId) -> bool {
        self.sinks.remove(&sink)
    }

    pub(crate) fn clear_sinks(&mut self) {
        self.sinks.clear();
    }
}

impl PartialEq for Net {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Net {}

impl Hash for Net {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
