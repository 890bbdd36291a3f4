use std::process::ExitCode;

use clap::Parser;
use strings_audit::cli::{Arguments, ExitStatus, report};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version also arrive here
            return if err.use_stderr() {
                ExitStatus::Error.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    match strings_audit::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
