use std::process::ExitCode;

fn main() -> ExitCode {
    mclang::cli::scan::run()
}
