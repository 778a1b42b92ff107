use super::*;

fn run(source: &str) -> Result<(), VMError> {
    interpret(source)
}

#[test]
fn arithmetic_precedence() {
    assert!(run("1 + 2 * 3;").is_err()); // no statement terminator in this language
    assert!(run("1 + 2 * 3").is_ok());
}

#[test]
fn grouping_overrides_precedence() {
    assert!(run("(-1 + 2) * 3 - -4").is_ok());
}

#[test]
fn comparison_and_equality_chain() {
    assert!(run("!(5 - 4 > 3 * 2 == !nil)").is_ok());
}

#[test]
fn adding_number_to_bool_is_a_runtime_error() {
    let err = run("1 + true").unwrap_err();
    assert!(matches!(err, VMError::RuntimeError(_)));
    assert!(err.to_string().contains("Operands must be numbers."));
}

#[test]
fn negating_a_bool_is_a_runtime_error() {
    let err = run("-true").unwrap_err();
    assert!(matches!(err, VMError::RuntimeError(_)));
}

#[test]
fn unclosed_grouping_is_a_compile_error() {
    let err = run("(1 + 2").unwrap_err();
    assert!(matches!(err, VMError::CompileError(_)));
}

#[test]
fn nil_is_not_equal_to_false() {
    assert!(run("nil == false").is_ok());
}
