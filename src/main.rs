extern crate anyhow;
extern crate clap;
extern crate serde;
extern crate serde_json;
extern crate thiserror;

#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(feature = "tracing")] {
                $($body)*
            }
        }
    };
}

#[macro_export]
macro_rules! if_not_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(not(feature = "tracing"))] {
                $($body)*
            }
        }
    };
}

if_tracing! {
    use tracing_subscriber::{EnvFilter, fmt};
}

use std::process;

use crate::cli::{Cli, Command};
use clap::Parser;

mod algorithms;
mod cli;
mod compressor;
mod mutator;

#[cfg(test)]
mod tests;

fn main() {
    if_tracing! {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Compress(args) => cli::compress::compress(args),
        Command::Decompress(args) => cli::decompress::decompress(args),
        Command::Test(args) => cli::test::test(args),
        Command::Inspect(args) => cli::inspect::inspect(args),
    };

    if let Err(e) = result {
        if_tracing! {
            tracing::error!(error = %e, "command failed");
        }
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
