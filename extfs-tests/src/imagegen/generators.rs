use std::fs::File;

use extfs::{operations::FormatOptions, Superblock, SUPERBLOCK_MAGIC};

/// Size of the images below: 12 groups of 256 1 KiB blocks.
pub const IMAGE_SIZE: u64 = 1024 * 256 * 12;

/// Options that give [`IMAGE_SIZE`] images twelve small groups.
pub fn small_groups() -> FormatOptions {
    FormatOptions {
        block_size: 1024,
        blocks_per_group: Some(256),
        inodes_per_group: 32,
        inode_size: 128,
        ..FormatOptions::default()
    }
}

/// Zero-filled file
pub fn generate_0000(f: &File) {
    super::utils::create_file(f, IMAGE_SIZE)
}

/// Valid superblock magic, every other field zero
pub fn generate_0001(f: &File) {
    generate_0000(f);

    let d = super::utils::get_disk(f);
    let mut sb = Superblock::new();
    sb.set_magic(SUPERBLOCK_MAGIC);
    sb.store(d).unwrap();
}

/// A valid primary superblock and nothing else
pub fn generate_0002(f: &File) {
    generate_0000(f);

    let d = super::utils::get_disk(f);
    extfs::test::sb::sample().store(d).unwrap();
}

/// Formatted with sparse_super
pub fn generate_0003(f: &File) {
    generate_0000(f);

    let d = super::utils::get_disk(f);
    extfs::operations::format(d, &small_groups()).unwrap();
}

/// Formatted without sparse_super
pub fn generate_0004(f: &File) {
    generate_0000(f);

    let d = super::utils::get_disk(f);
    let opts = FormatOptions {
        sparse_super: false,
        ..small_groups()
    };
    extfs::operations::format(d, &opts).unwrap();
}

/// Formatted, then the primary superblock's first inode is corrupted
pub fn generate_0005(f: &File) {
    generate_0003(f);

    let d = super::utils::get_disk(f);
    let mut sb = Superblock::load(d.clone()).unwrap();
    sb.set_first_ino(5);
    sb.store(d).unwrap();
}

/// Formatted with the 64bit feature
pub fn generate_0006(f: &File) {
    generate_0000(f);

    let d = super::utils::get_disk(f);
    let opts = FormatOptions {
        enable_64bit: true,
        ..small_groups()
    };
    extfs::operations::format(d, &opts).unwrap();
}
