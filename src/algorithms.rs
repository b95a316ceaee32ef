pub mod huffman;

pub use huffman::HuffmanCoding;
