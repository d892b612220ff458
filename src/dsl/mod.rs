//! DSL (Domain Specific Language) parser for netlist descriptions.
//!
//! A small line-oriented language describing the nets of one block and how
//! they are wired.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist    = { line }
//! line       = comment | directive | empty
//! comment    = ('#' | ';') { any_char }
//! directive  = block | net | connect
//! block      = ".block" name
//! net        = ".net" name [signal]
//! connect    = ".connect" source sink { sink }
//!
//! name       = word
//! word       = non_space { non_space }
//! ```
//!
//! Words may contain any non-whitespace character, so bus bits (`data[3]`)
//! and hierarchical names (`u0/q`) need no quoting. A `.net` without a
//! signal name carries a signal of the same name.
//!
//! # Example
//!
//! ```text
//! # clock buffer feeding two flops
//! .block clkgen
//! .net clk_in  clk
//! .net clk_buf clk
//! .net ff0_clk clk
//! .net ff1_clk clk
//!
//! .connect clk_in  clk_buf
//! .connect clk_buf ff0_clk ff1_clk
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a netlist DSL string into an AST.
pub fn parse(input: &str) -> Result<NetlistAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a netlist DSL file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<NetlistAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::NetgraphError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
