//! Entry point for the `platewise` command-line interface.
#![forbid(unsafe_code)]

use platewise_cli::{CliError, run};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("platewise: {err}");
            std::process::exit(1);
        }
    }
}
