//! cli component of huffpack.
//!
//! `$exename` stands for the executable name, `<description>` denotes a required argument.
//!
//! > `$exename compress <input path> <output path>`
//!
//! reads the input twice (once to count byte frequencies, once to encode) and writes the
//! header followed by the packed codes. an empty input produces an empty output file.
//! `c` and `enc` are accepted as aliases.
//!
//! > `$exename decompress <input path> <output path>`
//!
//! rebuilds the tree from the header and decodes exactly as many bytes as the header
//! announces. the output file is only written once decoding has fully succeeded, so a
//! corrupt or truncated input never leaves a partial file behind. `d` and `dec` are accepted
//! as aliases.
//!
//! > `$exename test <input path>`
//!
//! compresses the file in memory, immediately decompresses it, and compares the result with
//! the original, printing sizes and timings to stderr.
//!
//! > `$exename inspect <compressed path>`
//!
//! prints the header of a compressed file together with the code assigned to every byte, as json.
//!
//! log verbosity is controlled with the `RUST_LOG` environment variable.
use clap::{Args, Parser, Subcommand};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::compressor::HuffmanError;

pub mod compress;
pub mod decompress;
pub mod inspect;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O unavailable for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Codec(#[from] HuffmanError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("roundtrip error: {0}")]
    Roundtrip(#[from] anyhow::Error),

    #[error("roundtrip of {} did not reproduce the original", .0.display())]
    RoundtripMismatch(PathBuf),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// CLI arguments for the huffpack application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a file
    #[command(visible_alias = "c", alias = "enc")]
    Compress(CompressArgs),

    /// Decompress a file
    #[command(visible_alias = "d", alias = "dec")]
    Decompress(DecompressArgs),

    /// Test compression/decompression roundtrip
    Test(TestArgs),

    /// Print the header and code table of a compressed file
    Inspect(InspectArgs),
}

/// Arguments specific to the compress command
#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Path to the input file
    pub input: PathBuf,

    /// Path for the compressed output file
    pub output: PathBuf,
}

/// Arguments specific to the decompress command
#[derive(Args, Debug)]
pub struct DecompressArgs {
    /// Path to the compressed input file
    pub input: PathBuf,

    /// Path for the decompressed output file
    pub output: PathBuf,
}

/// Arguments specific to the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the original file
    pub input: PathBuf,
}

/// Arguments specific to the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the compressed file
    pub input: PathBuf,
}

/// Attaches `path` to an I/O error.
pub(crate) fn io_at(path: &Path) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(io_at(path))
}

pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(io_at(path))
}

pub(crate) fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(io_at(path))
}

pub(crate) fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(io_at(path))
}

/// Fresh per-test directory under the system temp dir.
#[cfg(test)]
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("huffpack-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    dir
}
