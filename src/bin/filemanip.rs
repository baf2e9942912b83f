use std::{env, ffi::OsString, process};

use filemanip::{CommandLineConfig, execute, logging};

fn main() {
    logging::init();
    let args: Vec<OsString> = env::args_os().collect();
    if CommandLineConfig::is_help_request(&args) {
        print!("{}", CommandLineConfig::help());
        return;
    }
    let config = match CommandLineConfig::from_args(&args) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    match execute(config.command, &config.command_args) {
        Ok(outcome) => {
            tracing::debug!(
                command = %outcome.kind,
                path = %outcome.written.display(),
                bytes = outcome.bytes,
                "done"
            );
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
