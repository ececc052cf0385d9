//! IMC CLI - Interactive Body-Mass Index Calculator
//!
//! Prompts for weight and height, prints the index, its classification and a
//! recommendation, and offers to repeat. Takes no flags besides `--help` and
//! `--version`.
//!
//! # Exit status
//!
//! - `0` after a normal finish, Ctrl-C, or end of input
//! - `1` on any other fault

use std::io;
use std::process::ExitCode;

use clap::Parser;
use imc_core::Calculator;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod shell;

pub use error::{CliError, Result};

use shell::Shell;

/// Interactive body-mass index calculator
#[derive(Parser)]
#[command(name = "imc")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn init_tracing() {
    // stderr keeps log lines out of the prompts
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn report(err: &CliError) {
    if let Err(write_err) = err.report(&mut io::stdout()) {
        error!(%write_err, "Could not write farewell");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let _cli = Cli::parse();

    let calculator = Calculator::new();
    info!("Calculator ready");

    let session = tokio::task::spawn_blocking(move || {
        // stdout stays unlocked: the Ctrl-C branch below prints while this
        // task is still blocked on stdin
        let mut shell = Shell::new(io::stdin().lock(), io::stdout(), &calculator);
        shell.run()
    });

    tokio::select! {
        joined = session => match joined {
            Ok(Ok(())) => ExitCode::SUCCESS,
            Ok(Err(err)) => {
                report(&err);
                ExitCode::from(err.exit_status())
            }
            Err(join_err) => {
                error!(%join_err, "Shell task failed");
                println!("\n❌ Erro inesperado: {}", join_err);
                println!("Por favor, tente novamente.");
                ExitCode::FAILURE
            }
        },
        signal = tokio::signal::ctrl_c() => {
            // the blocking reader never returns on its own, so exit directly
            let err = match signal {
                Ok(()) => CliError::Interrupted,
                Err(io_err) => {
                    error!(%io_err, "Error handling Ctrl+C signal");
                    CliError::Io(io_err)
                }
            };
            report(&err);
            std::process::exit(i32::from(err.exit_status()));
        }
    }
}
