use exec::mach::{Event, Runtime};

pub fn exec(source: &str) -> String {
    exec_event(source).1
}

pub fn exec_event(source: &str) -> (Event, String) {
    let mut runtime = Runtime::default();
    let event = runtime.run(source);
    assert!(
        runtime.vars().is_empty(),
        "variables left alive after the run"
    );
    assert_eq!(runtime.depth(), 0, "scopes left open after the run");
    (event, runtime.into_terminal())
}

#[allow(dead_code)]
pub fn error_code(source: &str) -> exec::lang::ErrorCode {
    match exec_event(source).0 {
        Event::Failed(error) => error.code(),
        other => panic!("expected the run to fail, got {:?}", other),
    }
}
