use voxell_rng::rng::XorShift128;

use crate::compressor::compression_ratio;
use crate::mutator::Mutator;

const SHORT_DATA: &[u8] = b"Hello, World!";
const LONG_DATA: &[u8] =
    b"This is a longer string to test the huffman coding algorithm. It should be able to handle various lengths and characters.";
const REPEATING_DATA: &[u8] = b"a baba da babble da dabble babble doo bee babble dabble dooble dee boo dooble daddle boo";
const SINGLE_BYTE: &[u8] = b"A";
const ONE_SYMBOL_RUN: &[u8] = &[0x42; 777];
const EMPTY_DATA: &[u8] = &[];

fn rng_data(len: usize) -> Vec<u8> {
    let mut arr = Vec::with_capacity(len);
    let mut rng = XorShift128::new(0xdeadcafe);
    for _ in 0..len {
        let data = rng.peek_next_u64();
        arr.push((data & 0xFF) as u8);
        rng = XorShift128::new(data);
    }
    arr
}

fn all_byte_values() -> Vec<u8> {
    (0..4096u32).map(|i| (i % 256) as u8).collect()
}

pub fn roundtrip_test<M: Mutator>(mut mutator: M, name: &str) {
    let rng = rng_data(1000);
    let every_byte = all_byte_values();
    let cases: &[(&[u8], &str)] = &[
        (REPEATING_DATA, "repeating data"),
        (SHORT_DATA, "short data"),
        (LONG_DATA, "long data"),
        (SINGLE_BYTE, "single byte"),
        (ONE_SYMBOL_RUN, "one symbol run"),
        (&rng, "rng data"),
        (&every_byte, "every byte value"),
        (EMPTY_DATA, "empty data"),
    ];

    for &(test_case, test_name) in cases {
        match mutator.test_roundtrip(test_case) {
            Ok(eq) => {
                let ratio = compression_ratio(eq.get_original(), eq.get_compressed());

                eprintln!("Compression ratio for {} with {}: {:.2}%", test_name, name, ratio * 100.0);

                assert!(
                    eq.is_successful(),
                    "Roundtrip test for {} failed at {}:\n\tExpected: {:?}\n\tGot: {:?}\n\tCompressed: {:?}",
                    name,
                    test_name,
                    eq.get_original(),
                    eq.get_decompressed(),
                    eq.get_compressed(),
                );
            }
            Err(e) => {
                panic!("Fatal error while trying to compress/decompress {} with {}: {}", test_name, name, e);
            }
        }
    }
}
