use std::process::ExitCode;

fn main() -> ExitCode {
    dreamstore_cli::run()
}
