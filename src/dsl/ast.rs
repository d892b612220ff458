//! Abstract Syntax Tree types for the netlist DSL.

/// Complete AST representation of a parsed netlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetlistAst {
    /// Name from the `.block` directive
    pub block_name: Option<String>,
    /// Net declarations, in source order
    pub nets: Vec<NetDef>,
    /// Connections, in source order
    pub connections: Vec<ConnectionDef>,
}

impl NetlistAst {
    /// Create a new empty netlist AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A `.net` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct NetDef {
    /// Net name
    pub name: String,
    /// Signal name (defaults to the net name)
    pub signal: String,
    /// Source line number for error reporting
    pub line: usize,
}

/// A `.connect` line: one source driving one or more sinks.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionDef {
    pub source: String,
    pub sinks: Vec<String>,
    /// Source line number for error reporting
    pub line: usize,
}
