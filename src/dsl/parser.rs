//! Parser for the netlist DSL.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{NetgraphError, Result};

/// Parser for netlist DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire netlist description.
    pub fn parse(&mut self) -> Result<NetlistAst> {
        let mut ast = NetlistAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Word => {
                    return Err(NetgraphError::parse(
                        self.current.line,
                        format!("expected a directive, got {:?}", self.current.text),
                    ));
                }
                TokenKind::Eof => break,
            }

            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => {}
                _ => {
                    return Err(NetgraphError::parse(
                        self.current.line,
                        format!("unexpected token {:?} at end of line", self.current.text),
                    ));
                }
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect_word(&mut self, what: &str) -> Result<String> {
        if self.current.kind == TokenKind::Word {
            let text = std::mem::take(&mut self.current.text);
            self.advance()?;
            Ok(text)
        } else {
            Err(NetgraphError::parse(
                self.current.line,
                format!("expected {}, got {:?}", what, self.current.kind),
            ))
        }
    }

    fn optional_word(&mut self) -> Result<Option<String>> {
        if self.current.kind == TokenKind::Word {
            self.expect_word("word").map(Some)
        } else {
            Ok(None)
        }
    }

    fn parse_directive(&mut self, ast: &mut NetlistAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".block" => {
                let name = self.expect_word("block name")?;
                if ast.block_name.is_some() {
                    return Err(NetgraphError::parse(line, "duplicate .block directive"));
                }
                ast.block_name = Some(name);
            }
            ".net" => {
                let name = self.expect_word("net name")?;
                let signal = self.optional_word()?.unwrap_or_else(|| name.clone());
                ast.nets.push(NetDef { name, signal, line });
            }
            ".connect" => {
                let source = self.expect_word("source net")?;
                let mut sinks = vec![self.expect_word("sink net")?];
                while let Some(sink) = self.optional_word()? {
                    sinks.push(sink);
                }
                ast.connections.push(ConnectionDef {
                    source,
                    sinks,
                    line,
                });
            }
            _ => {
                return Err(NetgraphError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }
        Ok(())
    }
}
