//! Takes source text, parses it, and emits bytecode in the same pass —
//! there's no separate AST stage. Each expression form writes its own
//! bytes to the chunk as soon as its operands are on the (conceptual)
//! stack.
use std::num::ParseFloatError;

use crate::{
    chunk::{Chunk, OpCode},
    compiler::{
        parser::{Parser, ParserError},
        precedence::{ParseRule, Precedence},
    },
    scanner::{Scanner, token::TokenType},
    value::Value,
};

#[cfg(feature = "debug_trace_execution")]
use crate::debug::Debug;

pub mod parser;
pub mod precedence;

#[derive(Debug, Clone, PartialEq)]
pub enum CompilerError {
    ParserError(ParserError),
}

impl std::fmt::Display for CompilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParserError(error) => write!(f, "{error}"),
        }
    }
}

impl From<ParserError> for CompilerError {
    fn from(error: ParserError) -> Self {
        Self::ParserError(error)
    }
}

/// Parses one expression and writes its bytecode into `chunk`. Doesn't
/// know or care how that bytecode later gets executed.
pub struct Compiler<'a> {
    source: &'a str,
    parser: Parser<'a>,
    chunk: &'a mut Chunk,
}

impl<'a> Compiler<'a> {
    pub fn new(source: &'a str, chunk: &'a mut Chunk) -> Self {
        let scanner = Scanner::new(source);
        let parser = Parser::new(scanner, source);

        Self {
            parser,
            chunk,
            source,
        }
    }

    /// Compiles the whole source as a single expression followed by end
    /// of input. Returns `Err` as soon as the first error is reported;
    /// `Parser::had_error`/`panic_mode` govern which errors actually
    /// surface versus which get suppressed as cascades of the first.
    pub fn compile(&mut self) -> Result<(), CompilerError> {
        self.parser.advance()?;

        self.expression()?;

        self.parser
            .consume(TokenType::Eof, "Expect end of expression.")?;

        self.end_compiler()?;

        Ok(())
    }

    fn expression(&mut self) -> Result<(), CompilerError> {
        self.parse_precedence(Precedence::Assignment)
    }

    fn number(&mut self) -> Result<(), CompilerError> {
        let token = self
            .parser
            .previous
            .expect("number() is only ever called as a prefix rule, after advance() set previous");

        let lexeme = &self.source[token.start..token.start + token.length as usize];
        let value: f64 = lexeme
            .parse()
            .map_err(|e: ParseFloatError| CompilerError::ParserError(ParserError::TokenError(e.to_string())))?;

        self.emit_constant(Value::Number(value))
    }

    fn grouping(&mut self) -> Result<(), CompilerError> {
        self.expression()?;
        self.parser
            .consume(TokenType::RightParen, "Expect ')' after expression.")?;
        Ok(())
    }

    fn current_ty(&self) -> TokenType {
        self.parser
            .current
            .expect("current token must be set once parsing has started")
            .ty
    }

    fn previous_ty(&self) -> TokenType {
        self.parser
            .previous
            .expect("previous token must be set once parsing has started")
            .ty
    }

    /// The heart of the Pratt parser: parses a prefix expression, then
    /// keeps folding in infix operators as long as their precedence
    /// meets or exceeds `precedence`.
    fn parse_precedence(&mut self, precedence: Precedence) -> Result<(), CompilerError> {
        self.parser.advance()?;

        let Some(prefix_rule) = ParseRule::get_parse_rule(self.previous_ty()).prefix else {
            self.parser.error_at_previous("Expect expression.")?;
            return Ok(());
        };
        prefix_rule(self)?;

        while precedence <= ParseRule::get_parse_rule(self.current_ty()).precedence {
            self.parser.advance()?;
            if let Some(infix_rule) = ParseRule::get_parse_rule(self.previous_ty()).infix {
                infix_rule(self)?;
            }
        }

        Ok(())
    }

    fn binary(&mut self) -> Result<(), CompilerError> {
        let operator = self.previous_ty();
        let rule = ParseRule::get_parse_rule(operator);

        self.parse_precedence(Precedence::from(rule.precedence as u8 + 1))?;

        match operator {
            TokenType::Plus => self.emit_byte(OpCode::OpAdd as u8),
            TokenType::Minus => self.emit_byte(OpCode::OpSubtract as u8),
            TokenType::Star => self.emit_byte(OpCode::OpMultiply as u8),
            TokenType::Slash => self.emit_byte(OpCode::OpDivide as u8),
            TokenType::BangEqual => self.emit_bytes(OpCode::OpEqual as u8, OpCode::OpNot as u8),
            TokenType::EqualEqual => self.emit_byte(OpCode::OpEqual as u8),
            TokenType::Greater => self.emit_byte(OpCode::OpGreater as u8),
            TokenType::GreaterEqual => self.emit_bytes(OpCode::OpLess as u8, OpCode::OpNot as u8),
            TokenType::Less => self.emit_byte(OpCode::OpLess as u8),
            TokenType::LessEqual => self.emit_bytes(OpCode::OpGreater as u8, OpCode::OpNot as u8),
            _ => unreachable!("binary() is only ever installed as an infix rule for binary operators"),
        }
    }

    fn unary(&mut self) -> Result<(), CompilerError> {
        let operator = self.previous_ty();

        self.parse_precedence(Precedence::Unary)?;

        match operator {
            TokenType::Bang => self.emit_byte(OpCode::OpNot as u8),
            TokenType::Minus => self.emit_byte(OpCode::OpNegate as u8),
            _ => unreachable!("unary() is only ever installed as a prefix rule for unary operators"),
        }
    }

    fn literal(&mut self) -> Result<(), CompilerError> {
        match self.previous_ty() {
            TokenType::False => self.emit_byte(OpCode::OpFalse as u8),
            TokenType::Nil => self.emit_byte(OpCode::OpNil as u8),
            TokenType::True => self.emit_byte(OpCode::OpTrue as u8),
            _ => unreachable!("literal() is only ever installed as a prefix rule for false/nil/true"),
        }
    }

    fn emit_constant(&mut self, value: Value) -> Result<(), CompilerError> {
        let constant = self.make_constant(value)?;
        self.emit_bytes(OpCode::OpConstant as u8, constant)
    }

    /// Adds `value` to the constant pool, rejecting it once the pool
    /// would overflow the single byte `OpConstant`'s operand has to
    /// address it with.
    fn make_constant(&mut self, value: Value) -> Result<u8, CompilerError> {
        let constant = self.chunk.add_constant(value);

        if constant > u8::MAX as usize {
            self.parser.error_at_previous("Too many constants in one chunk.")?;
            return Ok(0);
        }

        Ok(constant as u8)
    }

    fn end_compiler(&mut self) -> Result<(), CompilerError> {
        self.emit_return()?;

        #[cfg(feature = "debug_trace_execution")]
        if !self.parser.had_error {
            Debug::dissassemble_chunk(self.chunk, "code");
        }

        Ok(())
    }

    fn emit_byte(&mut self, byte: u8) -> Result<(), CompilerError> {
        let line = self
            .parser
            .previous
            .expect("a token precedes every byte this compiler emits")
            .line;
        self.chunk.write_chunk(byte, line);
        Ok(())
    }

    fn emit_return(&mut self) -> Result<(), CompilerError> {
        self.emit_byte(OpCode::OpReturn as u8)
    }

    fn emit_bytes(&mut self, byte1: u8, byte2: u8) -> Result<(), CompilerError> {
        self.emit_byte(byte1)?;
        self.emit_byte(byte2)
    }
}

#[cfg(test)]
mod tests;
