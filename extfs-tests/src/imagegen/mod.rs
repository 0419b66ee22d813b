pub mod generators;
mod utils;

use std::fs::File;

use data_encoding::HEXUPPER;
use sha2::{Digest, Sha256};

/// SHA-256 of a whole image file, hex encoded.
pub fn digest_file(name: &str) -> String {
    let mut file = File::open(name).unwrap();
    let mut sha256 = Sha256::new();
    std::io::copy(&mut file, &mut sha256).unwrap();
    HEXUPPER.encode(sha256.finalize().as_ref())
}

/// SHA-256 of a byte slice, hex encoded.
pub fn digest_bytes(data: &[u8]) -> String {
    HEXUPPER.encode(Sha256::digest(data).as_ref())
}
