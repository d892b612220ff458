//! Diagnostic text rendering of nets.
//!
//! The rendering is for humans and logs, not a wire format:
//!
//! ```text
//! Net Name: q_buf
//! Signal Name: q
//! Source: q
//! Sinks: d0 d1
//! ```

use std::collections::HashMap;
use std::fmt;

use super::record::Net;
use super::types::NetId;

/// Placeholder printed for an undriven net's source.
pub const NULL_SOURCE: &str = "null";

/// Resolves net handles to nets.
pub trait NetLookup {
    fn lookup(&self, id: NetId) -> Option<&Net>;
}

impl NetLookup for [Net] {
    fn lookup(&self, id: NetId) -> Option<&Net> {
        self.iter().find(|net| net.id() == id)
    }
}

impl NetLookup for Vec<Net> {
    fn lookup(&self, id: NetId) -> Option<&Net> {
        self.as_slice().lookup(id)
    }
}

impl NetLookup for HashMap<NetId, Net> {
    fn lookup(&self, id: NetId) -> Option<&Net> {
        self.get(&id)
    }
}

/// [`fmt::Display`] adapter returned by [`Net::display`].
pub struct NetDisplay<'a, L: NetLookup + ?Sized> {
    net: &'a Net,
    nets: &'a L,
}

impl<L: NetLookup + ?Sized> NetDisplay<'_, L> {
    fn write_ref(&self, f: &mut fmt::Formatter<'_>, id: NetId) -> fmt::Result {
        match self.nets.lookup(id) {
            Some(net) => f.write_str(net.name()),
            // unresolved handles print as themselves
            None => write!(f, "{}", id),
        }
    }
}

impl<L: NetLookup + ?Sized> fmt::Display for NetDisplay<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Net Name: {}", self.net.name())?;
        writeln!(f, "Signal Name: {}", self.net.signal_name())?;
        f.write_str("Source: ")?;
        match self.net.source() {
            Some(source) => self.write_ref(f, source)?,
            None => f.write_str(NULL_SOURCE)?,
        }
        f.write_str("\nSinks: ")?;
        for (i, sink) in self.net.sinks().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            self.write_ref(f, *sink)?;
        }
        Ok(())
    }
}

impl Net {
    /// Render this net, resolving source and sink names through `nets`.
    pub fn display<'a, L: NetLookup + ?Sized>(&'a self, nets: &'a L) -> NetDisplay<'a, L> {
        NetDisplay { net: self, nets }
    }

    pub fn to_display_string<L: NetLookup + ?Sized>(&self, nets: &L) -> String {
        self.display(nets).to_string()
    }

    /// Rendering prefixed with `net: `, for single-line log contexts.
    pub fn to_formatted_string<L: NetLookup + ?Sized>(&self, nets: &L) -> String {
        format!("net: {}", self.display(nets))
    }
}

/// Like [`Net::to_formatted_string`], but accepts a missing net.
pub fn describe<L: NetLookup + ?Sized>(net: Option<&Net>, nets: &L) -> String {
    match net {
        Some(net) => net.to_formatted_string(nets),
        None => format!("net: {}", NULL_SOURCE),
    }
}
