use crate::vm::{errors::VMError, interpret};

#[test]
fn arithmetic_precedence_evaluates_to_seven() {
    assert!(interpret("1 + 2 * 3").is_ok());
}

#[test]
fn grouping_and_unary_minus_evaluate_to_seven() {
    assert!(interpret("(-1 + 2) * 3 - -4").is_ok());
}

#[test]
fn comparison_equality_and_negation_compose() {
    assert!(interpret("!(5 - 4 > 3 * 2 == !nil)").is_ok());
}

#[test]
fn adding_number_and_bool_is_a_runtime_error() {
    let err = interpret("1 + true").unwrap_err();
    match err {
        VMError::RuntimeError(message) => {
            assert!(message.starts_with("Operands must be numbers."));
        }
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn unclosed_grouping_is_a_compile_error() {
    let err = interpret("(1 + 2").unwrap_err();
    match err {
        VMError::CompileError(e) => {
            assert!(e.to_string().contains("Expect ')' after expression."));
        }
        other => panic!("expected a compile error, got {other:?}"),
    }
}

#[test]
fn nil_is_not_equal_to_false() {
    assert!(interpret("nil == false").is_ok());
}

/// A run of bad tokens only reports the first; the rest are absorbed
/// by panic mode rather than each producing their own error line.
#[test]
fn consecutive_lexical_errors_report_only_the_first() {
    let err = interpret("@ @ @").unwrap_err();
    match err {
        VMError::CompileError(e) => {
            let message = e.to_string();
            assert_eq!(message.matches("Unexpected character").count(), 1);
        }
        other => panic!("expected a compile error, got {other:?}"),
    }
}

#[test]
fn unterminated_string_is_a_compile_error() {
    let err = interpret("\"unterminated").unwrap_err();
    assert!(matches!(err, VMError::CompileError(_)));
}
