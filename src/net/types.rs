//! Core types for net identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NET_ID: AtomicU64 = AtomicU64::new(0);

/// A process-unique handle for a net.
///
/// Handles are handed out from a monotonic counter when a [`Net`](super::Net)
/// is constructed and are never reused, so two handles compare equal only if
/// they name the same net. Ordering follows creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetId(u64);

impl NetId {
    /// Allocate a fresh handle.
    pub(crate) fn next() -> Self {
        NetId(NEXT_NET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value of the handle.
    pub fn index(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net#{}", self.0)
    }
}
