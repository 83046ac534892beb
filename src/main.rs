mod cli;

use cli::Args;
use file_adapters::prelude::*;
use file_adapters::shared::error::ExitCode;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version arrive here too, printed to stdout
            let _ = e.print();
            process::exit(argument_exit_code(&e).as_i32());
        }
    };

    let reporter = StderrProgressReporter::new(args.verbose);

    if let Err(e) = run(&args, &reporter) {
        reporter.report_error(&format!("\n❌ An error occurred:\n\n{}", e));

        // Display error chain
        for cause in e.chain().skip(1) {
            reporter.report_error(&format!("\nCaused by: {}", cause));
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: &Args, progress_reporter: &StderrProgressReporter) -> Result<()> {
    // Create adapters (Dependency Injection)
    let presenter = StdoutPresenter::new();

    let use_case = DisplayContentsUseCase::new(presenter, progress_reporter);
    use_case.execute(&args.to_request())
}

/// Exit code for an argument parsing outcome that stops the program
fn argument_exit_code(err: &clap::Error) -> ExitCode {
    if err.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
