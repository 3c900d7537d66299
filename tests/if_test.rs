mod common;
use common::*;
use exec::lang::ErrorCode;

#[test]
fn test_if_then() {
    assert_eq!(exec("integer a\na = 5\nif a > 3\nprint a\nend\n"), "5\n");
    assert_eq!(exec("integer a\nif a > 3\nprint a\nend\nprint a\n"), "0\n");
}

#[test]
fn test_if_then_else() {
    let taken = "logical t\nt = true\ninteger a\nif t\na = 1\nelse\na = 2\nend\nprint a\n";
    assert_eq!(exec(taken), "1\n");
    let not_taken = "integer a\nif false\na = 1\nelse\na = 2\nend\nprint a\n";
    assert_eq!(exec(not_taken), "2\n");
}

#[test]
fn test_nested_if_in_else() {
    assert_eq!(
        exec("integer a\na = 2\nif a == 1\nprint a\nelse\nif a == 2\na = 20\nprint a\nend\nend\n"),
        "20\n"
    );
}

#[test]
fn test_nested_else_is_not_ours() {
    assert_eq!(
        exec("integer a\nif false\nif true\nelse\nend\na = 1\nelse\na = 2\nend\nprint a\n"),
        "2\n"
    );
}

#[test]
fn test_if_opens_a_scope() {
    assert_eq!(
        error_code("if true\ninteger t\nend\nprint t\n"),
        ErrorCode::VarUndeclared
    );
    assert_eq!(exec("if true\ninteger t\nend\ninteger t\nprint t\n"), "0\n");
}

#[test]
fn test_else_without_if() {
    assert_eq!(error_code("push\nelse\npop\n"), ErrorCode::ElseWithoutIf);
    assert_eq!(error_code("else\n"), ErrorCode::ElseWithoutIf);
}

#[test]
fn test_end_without_block() {
    assert_eq!(error_code("end\n"), ErrorCode::UnexpectedEndOfScope);
    assert_eq!(error_code("push\nend\n"), ErrorCode::UnexpectedEndOfScope);
}

#[test]
fn test_condition_must_be_logical() {
    assert_eq!(error_code("integer a\nif a\nend\n"), ErrorCode::TypeMismatch);
    assert_eq!(error_code("if 1 + 2\nend\n"), ErrorCode::TypesIncompatible);
}

#[test]
fn test_missing_end() {
    assert_eq!(error_code("if false\nprint x\n"), ErrorCode::UnterminatedScope);
    let (_, out) = exec_event("if true\n");
    assert_eq!(out, "Error on line 1\nEnd of scope expected!\n");
}

#[test]
fn test_not_condition() {
    assert_eq!(
        exec("logical b\nif not b\nprint b\nend\nb = true\nwhile not b\nprint b\nend\n"),
        "false\n"
    );
    assert_eq!(error_code("logical b\nif sqrt b\nend\n"), ErrorCode::InvalidOperator);
    assert_eq!(error_code("integer i\nif not i\nend\n"), ErrorCode::TypeMismatch);
}
