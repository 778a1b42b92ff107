//! Bytecode disassembler, compiled in only under the
//! `debug_trace_execution` feature. Prints each instruction as
//! `offset line OP_NAME [operand]`.
use crate::chunk::{Chunk, OpCode};

pub struct Debug;

impl Debug {
    pub fn dissassemble_chunk(chunk: &Chunk, name: &str) {
        println!("== {name} ==");

        let mut offset = 0;
        while offset < chunk.code.len() {
            offset = Debug::dissassemble_instruction(chunk, offset);
        }
    }

    /// Prints the instruction at `offset` and returns the offset of the
    /// next one.
    pub fn dissassemble_instruction(chunk: &Chunk, offset: usize) -> usize {
        print!("{offset:04} ");

        if offset > 0 && chunk.lines[offset] == chunk.lines[offset - 1] {
            print!("   | ");
        } else {
            print!("{: >4} ", chunk.lines[offset]);
        }

        let instruction = chunk.code[offset];
        match OpCode::try_from(instruction) {
            Ok(OpCode::OpReturn) => Debug::simple_instruction("OpReturn", offset),
            Ok(OpCode::OpConstant) => Debug::constant_instruction("OpConstant", chunk, offset),
            Ok(OpCode::OpNil) => Debug::simple_instruction("OpNil", offset),
            Ok(OpCode::OpTrue) => Debug::simple_instruction("OpTrue", offset),
            Ok(OpCode::OpFalse) => Debug::simple_instruction("OpFalse", offset),
            Ok(OpCode::OpEqual) => Debug::simple_instruction("OpEqual", offset),
            Ok(OpCode::OpGreater) => Debug::simple_instruction("OpGreater", offset),
            Ok(OpCode::OpLess) => Debug::simple_instruction("OpLess", offset),
            Ok(OpCode::OpAdd) => Debug::simple_instruction("OpAdd", offset),
            Ok(OpCode::OpSubtract) => Debug::simple_instruction("OpSubtract", offset),
            Ok(OpCode::OpMultiply) => Debug::simple_instruction("OpMultiply", offset),
            Ok(OpCode::OpDivide) => Debug::simple_instruction("OpDivide", offset),
            Ok(OpCode::OpNot) => Debug::simple_instruction("OpNot", offset),
            Ok(OpCode::OpNegate) => Debug::simple_instruction("OpNegate", offset),
            Err(_) => {
                eprintln!("Can't fetch relevant OpCode. Invalid instruction: {instruction}");
                offset + 1
            }
        }
    }

    fn constant_instruction(name: &str, chunk: &Chunk, offset: usize) -> usize {
        let constant_index = chunk.code[offset + 1];
        print!("{name: <16} {constant_index: >4} '");
        println!("{}'", chunk.constants[constant_index as usize]);
        offset + 2
    }

    fn simple_instruction(name: &str, offset: usize) -> usize {
        println!("{name}");
        offset + 1
    }
}
