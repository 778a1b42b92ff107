use exprlox::{
    chunk::{Chunk, OpCode},
    value::Value,
    vm::VM,
};

/// Hand-assembles the bytecode for `-((1.2 + 3.4) / 5.6)` and runs it
/// directly, bypassing the compiler entirely.
fn main() {
    let mut chunk = Chunk::new();

    let constant = chunk.add_constant(Value::Number(1.2));
    chunk.write_chunk(OpCode::OpConstant as u8, 123);
    chunk.write_chunk(constant as u8, 123);

    let constant = chunk.add_constant(Value::Number(3.4));
    chunk.write_chunk(OpCode::OpConstant as u8, 123);
    chunk.write_chunk(constant as u8, 123);

    chunk.write_chunk(OpCode::OpAdd as u8, 123);

    let constant = chunk.add_constant(Value::Number(5.6));
    chunk.write_chunk(OpCode::OpConstant as u8, 123);
    chunk.write_chunk(constant as u8, 123);

    chunk.write_chunk(OpCode::OpDivide as u8, 123);
    chunk.write_chunk(OpCode::OpNegate as u8, 123);
    chunk.write_chunk(OpCode::OpReturn as u8, 123);

    let mut vm = VM::new(&chunk);
    if let Err(e) = vm.run() {
        eprintln!("{e}");
    }
}
