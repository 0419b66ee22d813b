#![allow(unknown_lints)]
#![allow(require_stability_comment)]
#![cfg(not(tarpaulin_include))]
use extfs::operations::{format, FormatOptions};

fn main() {
    extfs::test::logging::init_log();

    // mkfs <image> [blocks]
    let path = std::env::args().nth(1).unwrap_or_else(|| "test.img".to_string());
    let opts = FormatOptions::default();
    let d = match std::env::args().nth(2) {
        Some(blocks) => {
            let blocks: u64 = blocks.parse().unwrap();
            extfs::DiskFile::open_sized(&path, blocks * u64::from(opts.block_size)).unwrap()
        }
        None => extfs::DiskFile::open(&path).unwrap(),
    };
    let sb = format(d, &opts).unwrap();
    println!(
        "{}: {} blocks, {} inodes, uuid {}",
        path,
        sb.blocks_count(),
        sb.inodes_count(),
        sb.uuid().iter().map(|b| format!("{:02x}", b)).collect::<String>()
    );
}
