//! Wiring policy for a block.

/// Configuration for [`Block`](super::Block) wiring checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockConfig {
    /// Refuse connections that would close a loop.
    pub reject_cycles: bool,
    /// Let `connect` move an already driven sink to a new source.
    pub allow_rewire: bool,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            reject_cycles: false,
            allow_rewire: true,
        }
    }
}

impl BlockConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject connections that would make the signal-flow graph cyclic.
    ///
    /// Also turns cycles into a validation error in
    /// [`validate_block`](super::validate_block).
    pub fn with_reject_cycles(mut self, reject_cycles: bool) -> Self {
        self.reject_cycles = reject_cycles;
        self
    }

    /// Allow or forbid replacing a sink's existing driver.
    pub fn with_allow_rewire(mut self, allow_rewire: bool) -> Self {
        self.allow_rewire = allow_rewire;
        self
    }

    /// Strictest setting: acyclic, single assignment of every driver.
    pub fn strict() -> Self {
        Self::new().with_reject_cycles(true).with_allow_rewire(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let config = BlockConfig::default();
        assert!(!config.reject_cycles);
        assert!(config.allow_rewire);
        assert_eq!(config, BlockConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = BlockConfig::new().with_reject_cycles(true);
        assert!(config.reject_cycles);
        assert!(config.allow_rewire);
        assert_eq!(
            BlockConfig::strict(),
            BlockConfig {
                reject_cycles: true,
                allow_rewire: false
            }
        );
    }
}
