//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = watchgrid_cli::run() {
        eprintln!("watchgrid: {err}");
        std::process::exit(1);
    }
}
