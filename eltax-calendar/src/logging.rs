//! Log output of the command line tools.
//!
//! The library itself only emits records through the `log` facade (behind the `log` feature).
//! The binaries install a `tracing` subscriber writing to stderr, its `tracing-log` bridge
//! collects those records along with the binaries' own events.

use tracing_subscriber::EnvFilter;

/// Targets enabled by default: the library and both binaries.
const TARGETS: [&str; 3] = ["eltax_calendar", "eltax_schedule", "eltax_page"];

/// Level of our targets for a number of `-v` flags, starting from warnings.
fn level(verbosity: u8) -> &'static str {
    ["warn", "info", "debug", "trace"][usize::from(verbosity.min(3))]
}

/// Filter directives enabling our targets at a given verbosity, other crates stay silent.
fn directives(verbosity: u8) -> String {
    let level = level(verbosity);

    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the subscriber of a command line tool. A `RUST_LOG` variable replaces the filter
/// derived from `verbosity`.
pub fn init(verbosity: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(directives(verbosity)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
