use std::{io::BufWriter, process::ExitCode};

use gbtable::gbtable;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match gbtable(std::env::args_os().skip(1), &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("gbtable: {error}");
            ExitCode::FAILURE
        }
    }
}
