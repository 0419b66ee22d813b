#![cfg(not(tarpaulin_include))]
#![allow(clippy::all)]
#![allow(unknown_lints)]
#![allow(require_stability_comment)]

use extfs::*;

use strum::IntoEnumIterator;

use colored::*;

fn ok_or_bad(ok: bool, s: String) -> ColoredString {
    if ok {
        s.green()
    } else {
        s.red()
    }
}

fn print_features<F: std::fmt::Debug + Copy>(
    label: &str,
    all: impl Iterator<Item = F>,
    on: impl Fn(F) -> bool,
    unknown: u32,
) {
    print!("{:<12}", label);
    for f in all {
        if on(f) {
            print!("{} ", format!("{:?}", f).green());
        } else {
            print!("{} ", format!("{:?}", f).dimmed());
        }
    }
    if unknown != 0 {
        print!("{}", format!("unknown:{:#x}", unknown).red());
    }
    println!();
}

fn dump_fields(s: &Superblock) {
    println!(
        "magic:      {}",
        ok_or_bad(s.magic() == SUPERBLOCK_MAGIC, format!("{:#06x}", s.magic()))
    );
    println!(
        "inodes:     {}",
        ok_or_bad(s.inodes_count() != 0, s.inodes_count().to_string())
    );
    println!(
        "blocks:     {}",
        ok_or_bad(s.blocks_count() != 0, s.blocks_count().to_string())
    );
    println!(
        "blk/group:  {}",
        ok_or_bad(s.blocks_per_group() != 0, s.blocks_per_group().to_string())
    );
    println!(
        "ino/group:  {}",
        ok_or_bad(s.inodes_per_group() != 0, s.inodes_per_group().to_string())
    );
    println!(
        "inode size: {}",
        ok_or_bad(s.inode_size() >= MIN_INODE_SIZE, s.inode_size().to_string())
    );
    println!(
        "first ino:  {}",
        ok_or_bad(
            s.first_ino() >= FIRST_NONRESERVED_INODE,
            s.first_ino().to_string()
        )
    );
    println!(
        "desc size:  {}",
        ok_or_bad(
            (MIN_DESC_SIZE..=MAX_DESC_SIZE).contains(&s.desc_size()),
            s.desc_size().to_string()
        )
    );
    match block_size(s) {
        Ok(bs) => println!("block size: {}", bs),
        Err(e) => println!("block size: {}", e.to_string().red()),
    }
    println!("label:      {:?}", s.volume_name());
    println!(
        "uuid:       {}",
        s.uuid().iter().map(|b| format!("{:02x}", b)).collect::<String>()
    );
    print_features(
        "compat:",
        CompatFeature::iter(),
        |f| s.has_compat(f),
        CompatFeature::unknown_bits(s.feature_compat()),
    );
    print_features(
        "incompat:",
        IncompatFeature::iter(),
        |f| s.has_incompat(f),
        IncompatFeature::unknown_bits(s.feature_incompat()),
    );
    print_features(
        "ro_compat:",
        RoCompatFeature::iter(),
        |f| s.has_ro_compat(f),
        RoCompatFeature::unknown_bits(s.feature_ro_compat()),
    );
}

fn dump_groups(d: &Disk, s: &Superblock) {
    let count = match group_count(s) {
        Ok(c) => c,
        Err(e) => {
            println!("{}", e.to_string().red());
            return;
        }
    };
    println!("{} groups", count);
    for g in 0..count {
        let blocks = blocks_in_group(s, g).map(|b| b.to_string());
        let inodes = inodes_in_group(s, g).map(|i| i.to_string());
        print!(
            "group {:>6}: blocks {:>8} inodes {:>8} ",
            g,
            blocks.unwrap_or_else(|e| e.to_string()),
            inodes.unwrap_or_else(|e| e.to_string())
        );
        if let Ok(meta) = base_meta_blocks(s, g) {
            print!("meta {:>4} ", meta);
        }
        if is_super_in_bg(s, g) {
            let mut copy = Superblock::new();
            let loaded = superblock_offset(s, g)
                .and_then(|off| copy.load_at(d.clone(), off).map(|_| off));
            match loaded {
                Ok(off) => {
                    let valid = is_structurally_valid(&copy);
                    print!(
                        "backup @{} {}",
                        off,
                        ok_or_bad(valid, if valid { "OK".into() } else { "BAD".into() })
                    );
                }
                Err(e) => print!("backup {}", e.to_string().red()),
            }
        }
        println!();
    }
}

fn main() {
    let path = std::env::args().nth(1).unwrap();
    let d = DiskFile::open_file(std::fs::File::open(&path).unwrap()).unwrap();
    println!("Image is {} bytes long", d.size().unwrap());
    let s = Superblock::load(d.clone()).unwrap();
    let valid = is_structurally_valid(&s);
    println!(
        "Primary superblock: {}",
        ok_or_bad(valid, if valid { "valid".into() } else { "INVALID".into() })
    );
    dump_fields(&s);
    if valid {
        dump_groups(&d, &s);
    }
}
