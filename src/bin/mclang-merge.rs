use std::process::ExitCode;

fn main() -> ExitCode {
    mclang::cli::merge::run()
}
