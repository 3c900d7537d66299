extern crate ansi_term;
extern crate linefeed;
use crate::error;
use crate::lang::{Error, Line};
use crate::mach::{Config, Event, Listing, Runtime, Terminal};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use std::sync::Once;
use tracing::warn;

/// Exit code when a script fails.
pub const EXIT_FAILED: i32 = 65;
/// Exit code when a script can't be read.
pub const EXIT_NO_INPUT: i32 = 66;

static TRACING_INIT: Once = Once::new();

/// Installs the log subscriber. Does nothing unless `verbose` is set
/// or `RUST_LOG` is in the environment.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if verbose {
            EnvFilter::new("exec=debug")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

pub fn run_file(path: &Path, config: Config) -> i32 {
    let listing = match load(path) {
        Ok(listing) => listing,
        Err(error) => {
            eprintln!("{}", error);
            return EXIT_NO_INPUT;
        }
    };
    let mut runtime = Runtime::with_config(Stdout::default(), config);
    let event = runtime.run_listing(listing);
    runtime.terminal_mut().flush();
    match event {
        Event::Finished | Event::Exited => 0,
        Event::Failed(_) => EXIT_FAILED,
    }
}

pub fn main(config: Config) -> i32 {
    match main_loop(config) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn main_loop(config: Config) -> io::Result<()> {
    let interface = Interface::new("exec")?;
    interface.set_prompt("> ")?;
    let mut listing = Listing::default();

    loop {
        let input = match interface.read_line()? {
            ReadResult::Input(input) => input,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let line = Line::new(&input);
        let words: Vec<&str> = line.tokens().iter().map(String::as_str).collect();
        match words.as_slice() {
            ["run"] => {
                let mut runtime = Runtime::with_config(Console::new(&interface), config.clone());
                runtime.run_listing(listing.clone());
            }
            ["list"] => {
                let style = Style::new().dimmed();
                for (index, line) in listing.lines().enumerate() {
                    interface.write_fmt(format_args!(
                        "{} {}\n",
                        style.paint(format!("{:>4}", index)),
                        line
                    ))?;
                }
            }
            ["new"] => listing.clear(),
            ["load", filename] => match load(Path::new(filename)) {
                Ok(loaded) => listing = loaded,
                Err(error) => Console::new(&interface).error(&format!("{}\n", error)),
            },
            ["save", filename] => {
                if let Err(error) = save(&listing, Path::new(filename)) {
                    Console::new(&interface).error(&format!("{}\n", error));
                }
            }
            _ => listing.push_str(&input),
        }
        interface.add_history_unique(input);
    }
    Ok(())
}

/// Script output for the interactive session.
struct Console<'a> {
    interface: &'a Interface<DefaultTerminal>,
}

impl<'a> Console<'a> {
    fn new(interface: &'a Interface<DefaultTerminal>) -> Console<'a> {
        Console { interface }
    }
}

impl<'a> Terminal for Console<'a> {
    fn print(&mut self, s: &str) {
        if let Err(error) = self.interface.write_fmt(format_args!("{}", s)) {
            warn!(%error, "console write failed");
        }
    }

    fn error(&mut self, s: &str) {
        let bold = Style::new().bold();
        if let Err(error) = self.interface.write_fmt(format_args!("{}", bold.paint(s))) {
            warn!(%error, "console write failed");
        }
    }
}

/// Script output when running a file.
#[derive(Default)]
struct Stdout {
    failed: bool,
}

impl Stdout {
    fn flush(&mut self) {
        if let Err(error) = io::stdout().flush() {
            warn!(%error, "stdout flush failed");
        }
    }
}

impl Terminal for Stdout {
    fn print(&mut self, s: &str) {
        if self.failed {
            return;
        }
        if let Err(error) = io::stdout().write_all(s.as_bytes()) {
            warn!(%error, "stdout write failed");
            self.failed = true;
        }
    }
}

pub fn load(path: &Path) -> Result<Listing, Error> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(Listing::new(&source)),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound; path.display().to_string())),
            _ => Err(error!(InternalError; error.to_string())),
        },
    }
}

pub fn save(listing: &Listing, path: &Path) -> Result<(), Error> {
    if listing.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    match fs::write(path, listing.to_string()) {
        Ok(()) => Ok(()),
        Err(error) => Err(error!(InternalError; error.to_string())),
    }
}
