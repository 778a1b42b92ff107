//! Bytecode storage: an append-only sequence of opcodes and operands, a
//! parallel line-number vector, and a constant pool.
use crate::value::Value;

/// Thrown when a raw byte doesn't correspond to any `OpCode` variant.
/// Only reachable if bytecode was hand-assembled or corrupted; the
/// compiler in this crate never emits an invalid opcode.
#[derive(Debug, PartialEq)]
pub enum ChunkError {
    InvalidOpCode(u8),
}

/// `#[repr(u8)]` pins each variant to a single byte so casting to/from
/// `u8` round-trips across platforms. One instruction per variant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpCode {
    /// Reads a constant-pool index from the next byte and pushes it.
    OpConstant = 0,
    OpNil = 1,
    OpTrue = 2,
    OpFalse = 3,
    /// Pops two values, pushes whether they're equal.
    OpEqual = 4,
    OpGreater = 5,
    OpLess = 6,
    OpAdd = 7,
    OpSubtract = 8,
    OpMultiply = 9,
    OpDivide = 10,
    /// Inverts truthiness of the top value.
    OpNot = 11,
    OpNegate = 12,
    /// Pops and prints the final value; always the last byte of a chunk.
    OpReturn = 13,
}

impl TryFrom<u8> for OpCode {
    type Error = ChunkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::OpConstant),
            1 => Ok(Self::OpNil),
            2 => Ok(Self::OpTrue),
            3 => Ok(Self::OpFalse),
            4 => Ok(Self::OpEqual),
            5 => Ok(Self::OpGreater),
            6 => Ok(Self::OpLess),
            7 => Ok(Self::OpAdd),
            8 => Ok(Self::OpSubtract),
            9 => Ok(Self::OpMultiply),
            10 => Ok(Self::OpDivide),
            11 => Ok(Self::OpNot),
            12 => Ok(Self::OpNegate),
            13 => Ok(Self::OpReturn),
            _ => Err(ChunkError::InvalidOpCode(value)),
        }
    }
}

/// A compiled chunk: bytecode, one source line per byte, and the
/// constant pool that `OpConstant` operands index into.
#[derive(Debug, Default)]
pub struct Chunk {
    /// Opcodes and operand bytes, in emission order.
    pub code: Vec<u8>,
    /// `lines[i]` is the source line that produced `code[i]`.
    pub lines: Vec<i32>,
    /// Values referenced by `OpConstant` operand bytes.
    pub constants: Vec<Value>,
}

impl Chunk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one byte of code, tagging it with the line that produced
    /// it. `code` and `lines` always stay the same length; growth is
    /// whatever `Vec` already does.
    pub fn write_chunk(&mut self, byte: u8, line: i32) {
        self.code.push(byte);
        self.lines.push(line);
    }

    /// Adds a value to the constant pool and returns its index. Callers
    /// must keep the index within `u8` range; the compiler enforces the
    /// 256-constant budget before calling this.
    pub fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value);
        self.constants.len() - 1
    }
}
