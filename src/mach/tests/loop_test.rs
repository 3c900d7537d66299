use super::*;
use crate::lang::ErrorCode;

fn failed_with(event: Event) -> ErrorCode {
    match event {
        Event::Failed(error) => error.code(),
        other => panic!("expected a failure, got {:?}", other),
    }
}

#[test]
fn test_while_counts() {
    let (event, out) = run("integer i\nwhile i < 3\ni = i + 1\nprint i\nend\n");
    assert_eq!(event, Event::Finished);
    assert_eq!(out, "1\n2\n3\n");
}

#[test]
fn test_loop_body_is_a_fresh_scope() {
    let (event, out) = run(
        "integer i\nwhile i < 2\ninteger t\nt = i * 10\nprint t\ni = i + 1\nend\n",
    );
    assert_eq!(event, Event::Finished);
    assert_eq!(out, "0\n10\n");
}

#[test]
fn test_break_two_levels() {
    let (event, out) = run(
        "integer i\nwhile true\ni = i + 1\nif i == 3\nbreak 2\nend\nend\nprint i\n",
    );
    assert_eq!(event, Event::Finished);
    assert_eq!(out, "3\n");
}

#[test]
fn test_continue_skips_rest_of_body() {
    let (event, out) = run(
        "integer i\nwhile i < 4\ni = i + 1\nif i == 2\ncontinue 2\nend\nprint i\nend\n",
    );
    assert_eq!(event, Event::Finished);
    assert_eq!(out, "1\n3\n4\n");
}

#[test]
fn test_break_inner_loop_only() {
    let (event, out) = run(
        "integer i\nwhile i < 2\ni = i + 1\ninteger j\nwhile j < 5\nj = j + 1\nbreak\nend\nprint j\nend\n",
    );
    assert_eq!(event, Event::Finished);
    assert_eq!(out, "1\n1\n");
}

#[test]
fn test_break_out_of_push_block() {
    let (event, out) = run("integer x\npush\nbreak\nx = 1\npop\nprint x\n");
    assert_eq!(event, Event::Finished);
    assert_eq!(out, "0\n");
}

#[test]
fn test_break_levels_variable() {
    let (event, out) = run(
        "integer n\nn = 2\nwhile true\nwhile true\nbreak n\nend\nend\nprint n\n",
    );
    assert_eq!(event, Event::Finished);
    assert_eq!(out, "2\n");
}

#[test]
fn test_break_too_far() {
    let (event, out) = run("push\nbreak 2\npop\n");
    assert_eq!(failed_with(event), ErrorCode::UnexpectedEndOfScope);
    assert_eq!(out, "Error on line 1\nUnexpected end of scope!\n");
}

#[test]
fn test_break_zero() {
    let (event, _) = run("push\nbreak 0\npop\n");
    assert_eq!(failed_with(event), ErrorCode::InvalidArgument);
}

#[test]
fn test_step_limit() {
    let config = Config {
        step_limit: Some(100),
    };
    let (event, out) = run_with("while true\nend\n", config);
    assert_eq!(failed_with(event), ErrorCode::StepLimitExceeded);
    assert!(out.ends_with("Execution step limit of 100 exceeded!\n"));
}

#[test]
fn test_unterminated_while_body() {
    let (event, _) = run("while false\nprint x\n");
    assert_eq!(failed_with(event), ErrorCode::UnterminatedScope);
}
