//! Error types for the netgraph connectivity model.
//!
//! This module provides a unified error type [`NetgraphError`] that covers
//! all error conditions that can occur during netlist parsing, block wiring,
//! and block validation. Operations on a bare [`Net`](crate::net::Net) never
//! fail.

use thiserror::Error;

use crate::net::NetId;

/// Result type alias using [`NetgraphError`].
pub type Result<T> = std::result::Result<T, NetgraphError>;

/// Unified error type for all netgraph operations.
#[derive(Error, Debug)]
pub enum NetgraphError {
    // ============ DSL Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// A `.connect` line names a net that was never declared
    #[error("Undeclared net '{name}' referenced at line {line}")]
    UndeclaredNet { name: String, line: usize },

    /// A second `.net` line for an already declared name
    #[error("Net '{name}' declared again at line {line}")]
    DuplicateDeclaration { name: String, line: usize },

    // ============ Wiring Errors ============
    /// Handle is not owned by the block
    #[error("Net {id} is not part of block '{block}'")]
    UnknownNet { id: NetId, block: String },

    /// No net with this name in the block
    #[error("Net '{name}' not found in block '{block}'")]
    NetNotFound { name: String, block: String },

    /// Name already taken within the block
    #[error("Duplicate net name '{name}' in block '{block}'")]
    DuplicateNet { name: String, block: String },

    /// A net wired to itself
    #[error("Net '{net}' cannot drive itself")]
    SelfLoop { net: String },

    /// Sink already has a different driver and rewiring is disabled
    #[error("Net '{net}' is already driven by '{source_net}'")]
    AlreadyDriven { net: String, source_net: String },

    /// Wiring would close a loop in the signal-flow graph
    #[error("Connecting '{source_net}' -> '{sink}' would create a cycle")]
    CycleDetected { source_net: String, sink: String },

    // ============ Validation Errors ============
    /// A source or sink handle that does not resolve inside the block
    #[error("Net '{net}' references {id}, which is not part of the block")]
    DanglingReference { net: String, id: NetId },

    /// Only one side of a source/sink edge is recorded
    #[error("Edge '{source_net}' -> '{sink}' is only recorded on one side: {message}")]
    AsymmetricEdge {
        source_net: String,
        sink: String,
        message: String,
    },

    // ============ I/O Errors ============
    /// Error reading a netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NetgraphError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a duplicate net error
    pub fn duplicate_net(name: impl Into<String>, block: impl Into<String>) -> Self {
        Self::DuplicateNet {
            name: name.into(),
            block: block.into(),
        }
    }

    /// Create an asymmetric edge error
    pub fn asymmetric_edge(
        source_net: impl Into<String>,
        sink: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::AsymmetricEdge {
            source_net: source_net.into(),
            sink: sink.into(),
            message: message.into(),
        }
    }
}
