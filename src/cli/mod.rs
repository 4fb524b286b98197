use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, CommonArgs};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, Reporter, SUCCESS_MARK, Totals};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
