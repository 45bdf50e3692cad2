use std::process::ExitCode;

use minigit::ui::output;

fn main() -> ExitCode {
    match minigit::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
