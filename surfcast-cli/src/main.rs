//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use log::LevelFilter;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
    if let Err(err) = surfcast_cli::run() {
        eprintln!("surfcast: {err}");
        std::process::exit(1);
    }
}
