use std::io::{BufWriter, Write};

if_tracing! {
    use voxell_timer::time_fn;
}

use crate::algorithms::huffman;
use crate::cli::{CompressArgs, Result, create_file, io_at, open_file};

pub fn compress(args: CompressArgs) -> Result<()> {
    let input_path = &args.input;
    let output_path = &args.output;

    let mut input = open_file(input_path)?;
    let mut output = BufWriter::new(create_file(output_path)?);

    if_tracing! {{
        let (res, comp_dur) = time_fn(|| huffman::compress(&mut input, &mut output));
        let stats = res?;
        tracing::info!(event = "compress_complete", input = %input_path.display(), output = %output_path.display(), elapsed_ms = %comp_dur.as_micros(), original_len = stats.original_len, compressed_len = stats.compressed_len(), "compress finished");
    }}
    if_not_tracing! {{
        huffman::compress(&mut input, &mut output)?;
    }}
    output.flush().map_err(io_at(output_path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::cli::{CliError, scratch_dir};

    #[test]
    fn missing_input_is_io_error() {
        let dir = scratch_dir("compress_missing_input");
        let input = dir.join("absent.txt");
        let err = compress(CompressArgs {
            input: input.clone(),
            output: dir.join("out.huf"),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Io { ref path, .. } if *path == input));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unwritable_output_is_io_error() {
        let dir = scratch_dir("compress_unwritable_output");
        let input = dir.join("present.txt");
        fs::write(&input, b"plenty of bytes to compress").unwrap();
        let output = dir.join("no").join("such").join("dir").join("out.huf");

        let err = compress(CompressArgs {
            input,
            output: output.clone(),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Io { ref path, .. } if *path == output));
        assert!(!output.exists());

        fs::remove_dir_all(&dir).ok();
    }
}
