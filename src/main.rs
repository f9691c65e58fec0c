//! tkmanager - safe local storage for tokens.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tkmanager::cli::output;
use tkmanager::cli::{execute, Cli};
use tkmanager::core::constants::{KEY_ENV, LOG_ENV};
use tkmanager::error::{Error, KeyError, StoreError, TokenError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("tkmanager=debug")
        } else {
            EnvFilter::new("tkmanager=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.file) {
        let suggestion = match &e {
            Error::Store(StoreError::NotFound(_)) => Some("run: tkmanager make-file".to_string()),
            Error::Key(KeyError::NotFound(_)) => Some(format!(
                "run: tkmanager keygen, then export {}",
                KEY_ENV
            )),
            Error::Token(TokenError::Overwrite { .. }) => {
                Some("pass --force to overwrite".to_string())
            }
            Error::Store(StoreError::ConcurrentModification(_)) => {
                Some("the file changed while in use; retry".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(e.exit_code());
    }
}
