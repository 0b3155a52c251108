use std::error::Error;
use std::process::ExitCode;

use env_logger::Env;
use log::error;
use radix_secret::{recover_all, render, RecoveryConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = RecoveryConfig::default();
    match recover_all(&config) {
        Ok(secrets) => {
            for line in render(&secrets) {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(failure) => {
            error!("{}", failure);
            let mut cause = failure.source();
            while let Some(err) = cause {
                error!("  caused by: {}", err);
                cause = err.source();
            }
            ExitCode::FAILURE
        }
    }
}
