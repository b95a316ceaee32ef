if_tracing! {
    use voxell_timer::time_fn;
}

use crate::algorithms::huffman;
use crate::cli::{DecompressArgs, Result, read_file, write_file};

pub fn decompress(args: DecompressArgs) -> Result<()> {
    let input_path = &args.input;
    let output_path = &args.output;

    let compressed_data = read_file(input_path)?;
    let mut decompressed_data = Vec::new();

    // nothing touches the output path until decoding has succeeded
    if_tracing! {{
        let (res, decomp_dur) = time_fn(|| huffman::decompress(&compressed_data, &mut decompressed_data));
        res?;
        tracing::info!(event = "decompress_complete", input = %input_path.display(), output = %output_path.display(), elapsed_ms = ?decomp_dur, decompressed_len = decompressed_data.len(), "decompress finished");
    }}
    if_not_tracing! {{
        huffman::decompress(&compressed_data, &mut decompressed_data)?;
    }}
    write_file(output_path, &decompressed_data)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::cli::compress::compress;
    use crate::cli::{CliError, CompressArgs, scratch_dir as scratch};
    use crate::compressor::HuffmanError;

    #[test]
    fn file_roundtrip() {
        let dir = scratch("file_roundtrip");
        let original = dir.join("original.txt");
        let packed = dir.join("packed.huf");
        let restored = dir.join("restored.txt");
        let data = b"abracadabra, the file goes through the disk and back".repeat(40);
        fs::write(&original, &data).unwrap();

        compress(CompressArgs { input: original.clone(), output: packed.clone() }).unwrap();
        assert!(fs::metadata(&packed).unwrap().len() < data.len() as u64);
        decompress(DecompressArgs { input: packed, output: restored.clone() }).unwrap();
        assert_eq!(fs::read(&restored).unwrap(), data);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn empty_file_roundtrip() {
        let dir = scratch("empty_file_roundtrip");
        let original = dir.join("empty.bin");
        let packed = dir.join("empty.huf");
        let restored = dir.join("restored.bin");
        fs::write(&original, b"").unwrap();

        compress(CompressArgs { input: original, output: packed.clone() }).unwrap();
        assert_eq!(fs::metadata(&packed).unwrap().len(), 0);
        decompress(DecompressArgs { input: packed, output: restored.clone() }).unwrap();
        assert!(fs::read(&restored).unwrap().is_empty());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn truncated_file_leaves_no_output() {
        let dir = scratch("truncated_file");
        let original = dir.join("original.txt");
        let packed = dir.join("packed.huf");
        let restored = dir.join("restored.txt");
        fs::write(&original, b"some text that will lose its tail").unwrap();

        compress(CompressArgs { input: original, output: packed.clone() }).unwrap();
        let mut bytes = fs::read(&packed).unwrap();
        bytes.truncate(bytes.len() - 3);
        fs::write(&packed, &bytes).unwrap();

        let err = decompress(DecompressArgs { input: packed, output: restored.clone() }).unwrap_err();
        assert!(matches!(err, CliError::Codec(HuffmanError::TruncatedStream { .. })));
        assert!(!restored.exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = scratch("missing_input");
        let err = decompress(DecompressArgs {
            input: dir.join("nope.huf"),
            output: dir.join("out.bin"),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));

        fs::remove_dir_all(&dir).ok();
    }
}
