//! Executes a compiled chunk: a dispatch loop over one instruction
//! pointer and a value stack, with no call frames — this language has
//! no functions to frame.
pub mod errors;

use crate::{
    chunk::{Chunk, OpCode},
    compiler::Compiler,
    value::Value,
    vm::errors::{VMError, runtime_error},
};

#[cfg(feature = "debug_trace_execution")]
use crate::debug::Debug;

/// Matches clox's own fixed bound; a defensive limit, not one this
/// language's grammar could ever need in practice.
const STACK_MAX: usize = 256;

/// Compiles `source` and runs it to completion. Each call gets a fresh
/// chunk and VM — there's no persistent global state between calls, so
/// a REPL simply calls this once per line.
pub fn interpret(source: &str) -> Result<(), VMError> {
    let mut chunk = Chunk::new();
    let mut compiler = Compiler::new(source, &mut chunk);
    compiler.compile()?;

    let mut vm = VM::new(&chunk);
    vm.run()
}

pub struct VM<'a> {
    chunk: &'a Chunk,
    ip: usize,
    stack: Vec<Value>,
}

impl<'a> VM<'a> {
    #[must_use]
    pub fn new(chunk: &'a Chunk) -> Self {
        Self {
            chunk,
            ip: 0,
            stack: Vec::with_capacity(STACK_MAX),
        }
    }

    /// Reads and executes instructions until `OpReturn`. An unknown
    /// opcode is unreachable under bytecode this crate's own compiler
    /// emitted, but a corrupt or hand-assembled chunk is reported as a
    /// runtime error rather than treated as undefined behavior.
    pub fn run(&mut self) -> Result<(), VMError> {
        loop {
            #[cfg(feature = "debug_trace_execution")]
            Debug::dissassemble_instruction(self.chunk, self.ip);

            let instruction = self.read_byte();
            let Ok(opcode) = OpCode::try_from(instruction) else {
                return Err(self.runtime_error(format_args!(
                    "Invalid instruction: {instruction}"
                )));
            };

            match opcode {
                OpCode::OpReturn => {
                    let value = self.pop()?;
                    println!("{value}");
                    return Ok(());
                }
                OpCode::OpConstant => {
                    let constant = self.read_constant();
                    self.push(constant)?;
                }
                OpCode::OpNil => self.push(Value::Nil)?,
                OpCode::OpTrue => self.push(Value::Bool(true))?,
                OpCode::OpFalse => self.push(Value::Bool(false))?,
                OpCode::OpEqual => {
                    let b = self.pop()?;
                    let a = self.pop()?;
                    self.push(Value::Bool(a == b))?;
                }
                OpCode::OpGreater | OpCode::OpLess => self.comparison_op(opcode)?,
                OpCode::OpAdd | OpCode::OpSubtract | OpCode::OpMultiply | OpCode::OpDivide => {
                    self.arithmetic_op(opcode)?;
                }
                OpCode::OpNot => {
                    let value = self.pop()?;
                    self.push(!value)?;
                }
                OpCode::OpNegate => {
                    let value = self.peek(0)?;
                    if !value.is_number() {
                        return Err(self.runtime_error(format_args!("Operand must be a number.")));
                    }
                    let value = self.pop()?;
                    self.push(-value)?;
                }
            }
        }
    }

    fn read_byte(&mut self) -> u8 {
        let byte = self.chunk.code[self.ip];
        self.ip += 1;
        byte
    }

    fn read_constant(&mut self) -> Value {
        let index = self.read_byte();
        self.chunk.constants[index as usize]
    }

    fn push(&mut self, value: Value) -> Result<(), VMError> {
        if self.stack.len() >= STACK_MAX {
            return Err(self.runtime_error(format_args!("Stack overflow.")));
        }
        self.stack.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<Value, VMError> {
        self.stack
            .pop()
            .ok_or_else(|| self.runtime_error(format_args!("Expected value on the stack.")))
    }

    fn peek(&mut self, distance: usize) -> Result<Value, VMError> {
        self.stack
            .len()
            .checked_sub(distance + 1)
            .and_then(|i| self.stack.get(i))
            .copied()
            .ok_or_else(|| self.runtime_error(format_args!("Expected value on the stack.")))
    }

    /// Both operands must be numbers, whatever the operator — this
    /// language has no other numeric-ish type to coerce from.
    fn arithmetic_op(&mut self, opcode: OpCode) -> Result<(), VMError> {
        let b = self.peek(0)?;
        let a = self.peek(1)?;
        if !a.is_number() || !b.is_number() {
            return Err(self.runtime_error(format_args!("Operands must be numbers.")));
        }
        let b = self.pop()?;
        let a = self.pop()?;

        let result = match opcode {
            OpCode::OpAdd => a + b,
            OpCode::OpSubtract => a - b,
            OpCode::OpMultiply => a * b,
            OpCode::OpDivide => a / b,
            _ => unreachable!("arithmetic_op is only ever called for +, -, *, /"),
        };
        self.push(result)
    }

    fn comparison_op(&mut self, opcode: OpCode) -> Result<(), VMError> {
        let b = self.peek(0)?;
        let a = self.peek(1)?;
        if !a.is_number() || !b.is_number() {
            return Err(self.runtime_error(format_args!("Operands must be numbers.")));
        }
        let b = self.pop()?;
        let a = self.pop()?;

        let result = match opcode {
            OpCode::OpGreater => a.to_number() > b.to_number(),
            OpCode::OpLess => a.to_number() < b.to_number(),
            _ => unreachable!("comparison_op is only ever called for > and <"),
        };
        self.push(Value::Bool(result))
    }

    /// The line that produced the instruction just read — `ip` has
    /// already moved past it, hence `- 1`. Resets the stack per
    /// spec.md §4.4.1 so a caller that reuses this `VM` after a runtime
    /// error doesn't inherit a partially-popped stack.
    fn runtime_error(&mut self, arguments: std::fmt::Arguments) -> VMError {
        let error = runtime_error(self.chunk.lines[self.ip - 1], arguments);
        self.stack.clear();
        error
    }

}

#[cfg(test)]
mod tests;
