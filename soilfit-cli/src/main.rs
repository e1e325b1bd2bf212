//! Entry point for the soilfit command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = soilfit_cli::run() {
        #[expect(clippy::print_stderr, reason = "report fatal errors to the user")]
        {
            eprintln!("soilfit: {err}");
        }
        std::process::exit(1);
    }
}
