use super::*;

fn compile_ok(source: &str) -> Chunk {
    let mut chunk = Chunk::new();
    let mut compiler = Compiler::new(source, &mut chunk);
    compiler.compile().expect("expected source to compile");
    chunk
}

#[test]
fn number_literal_emits_constant_then_return() {
    let chunk = compile_ok("1.5");
    assert_eq!(chunk.constants, vec![Value::Number(1.5)]);
    assert_eq!(
        chunk.code,
        vec![OpCode::OpConstant as u8, 0, OpCode::OpReturn as u8]
    );
}

#[test]
fn unary_minus_emits_negate_after_its_operand() {
    let chunk = compile_ok("-1");
    assert_eq!(
        chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0,
            OpCode::OpNegate as u8,
            OpCode::OpReturn as u8
        ]
    );
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    // `1 + 2 * 3` should parse as `1 + (2 * 3)`: the multiply's operands
    // (2, 3) get emitted and multiplied before the add runs.
    let chunk = compile_ok("1 + 2 * 3");
    assert_eq!(
        chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0, // 1
            OpCode::OpConstant as u8,
            1, // 2
            OpCode::OpConstant as u8,
            2, // 3
            OpCode::OpMultiply as u8,
            OpCode::OpAdd as u8,
            OpCode::OpReturn as u8,
        ]
    );
}

#[test]
fn greater_equal_desugars_to_less_then_not() {
    let chunk = compile_ok("1 >= 2");
    assert_eq!(
        chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0,
            OpCode::OpConstant as u8,
            1,
            OpCode::OpLess as u8,
            OpCode::OpNot as u8,
            OpCode::OpReturn as u8,
        ]
    );
}

#[test]
fn literals_emit_their_own_opcode() {
    assert_eq!(
        compile_ok("true").code,
        vec![OpCode::OpTrue as u8, OpCode::OpReturn as u8]
    );
    assert_eq!(
        compile_ok("false").code,
        vec![OpCode::OpFalse as u8, OpCode::OpReturn as u8]
    );
    assert_eq!(
        compile_ok("nil").code,
        vec![OpCode::OpNil as u8, OpCode::OpReturn as u8]
    );
}

#[test]
fn grouping_does_not_emit_its_own_opcode() {
    let chunk = compile_ok("(1)");
    assert_eq!(
        chunk.code,
        vec![OpCode::OpConstant as u8, 0, OpCode::OpReturn as u8]
    );
}

#[test]
fn trailing_garbage_after_the_expression_is_a_compile_error() {
    let mut chunk = Chunk::new();
    let mut compiler = Compiler::new("1 1", &mut chunk);
    let err = compiler.compile().unwrap_err();
    assert!(err.to_string().contains("Expect end of expression."));
}

#[test]
fn missing_closing_paren_is_a_compile_error() {
    let mut chunk = Chunk::new();
    let mut compiler = Compiler::new("(1 + 2", &mut chunk);
    let err = compiler.compile().unwrap_err();
    assert!(err.to_string().contains("Expect ')' after expression."));
}

#[test]
fn bare_operator_with_no_operand_is_a_compile_error() {
    let mut chunk = Chunk::new();
    let mut compiler = Compiler::new("+", &mut chunk);
    let err = compiler.compile().unwrap_err();
    assert!(err.to_string().contains("Expect expression."));
}

#[test]
fn more_than_256_constants_is_a_compile_error() {
    // 257 distinct numeric literals push the constant pool past the
    // single byte `OpConstant`'s operand can index (spec.md §4.3.4).
    let source = (0..257)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    let mut chunk = Chunk::new();
    let mut compiler = Compiler::new(&source, &mut chunk);
    let err = compiler.compile().unwrap_err();
    assert!(err.to_string().contains("Too many constants in one chunk."));
}
