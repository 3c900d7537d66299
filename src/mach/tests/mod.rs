use crate::mach::{Config, Event, Runtime};

mod loop_test;

fn run(source: &str) -> (Event, String) {
    run_with(source, Config::default())
}

fn run_with(source: &str, config: Config) -> (Event, String) {
    let mut runtime = Runtime::with_config(String::new(), config);
    let event = runtime.run(source);
    assert!(runtime.vars().is_empty());
    assert_eq!(runtime.depth(), 0);
    (event, runtime.into_terminal())
}
