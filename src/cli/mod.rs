use anyhow::Result;

pub mod args;
pub mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let result = run::run(&args, |notice| report::print_notice(&notice, verbose))?;
    report::print(&result, args.format, args.missing_preview())?;

    Ok(ExitStatus::from_missing(
        result.total_missing,
        args.fail_on_missing,
    ))
}
