//! Main entry point for the gztree CLI app

fn main() -> std::process::ExitCode {
    gztree::cli_runner::init_logging();

    if let Err(e) = gztree::cli_runner::run_cli_app() {
        match e.downcast_ref::<clap::Error>() {
            Some(clap_err) => {
                // --help / --version land here too
                let _ = clap_err.print();
                if !clap_err.use_stderr() {
                    return std::process::ExitCode::SUCCESS;
                }
            }
            None => eprintln!("Error: {}", e),
        }
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
