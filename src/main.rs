use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = file_locator::cli::parse();
    app::run(args)
}
