//! Error types for the interactive shell.

use std::io::{self, Write};

use imc_core::ImcError;
use thiserror::Error;

/// Shell error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Measurement rejected by the calculator
    #[error("{0}")]
    InvalidInput(#[from] ImcError),

    /// Ctrl-C or end of input
    #[error("Programa interrompido pelo usuário.")]
    Interrupted,

    /// Terminal read/write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::Interrupted => 0,
            CliError::InvalidInput(_) | CliError::Io(_) => 1,
        }
    }

    /// Write the user-facing farewell for this error
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            CliError::Interrupted => writeln!(out, "\n\n👋 {}", self)?,
            CliError::InvalidInput(reason) => writeln!(out, "\n❌ Erro: {}", reason)?,
            CliError::Io(_) => {
                writeln!(out, "\n❌ Erro inesperado: {}", self)?;
                writeln!(out, "Por favor, tente novamente.")?;
            }
        }
        out.flush()
    }
}

/// Result alias for shell operations
pub type Result<T> = std::result::Result<T, CliError>;
