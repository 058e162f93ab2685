use expense_core::{
    cli::{output, run_cli},
    core::errors::CliError,
};

fn main() {
    match run_cli() {
        Ok(()) => {}
        // Each failed action already reported its own error.
        Err(CliError::ActionsFailed(_)) => std::process::exit(1),
        Err(err) => {
            output::error(format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}
