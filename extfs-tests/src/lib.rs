#![allow(unknown_lints)]
#![allow(require_stability_comment)]

#[cfg(not(tarpaulin_include))]
pub mod imagegen;

use extfs::Superblock;

/// Field-by-field comparison of the layout fields two superblock copies must agree on.
pub fn assert_same_layout(a: &Superblock, b: &Superblock) {
    assert_eq!(a.magic(), b.magic());
    assert_eq!(a.inodes_count(), b.inodes_count());
    assert_eq!(a.blocks_count(), b.blocks_count());
    assert_eq!(a.blocks_per_group(), b.blocks_per_group());
    assert_eq!(a.inodes_per_group(), b.inodes_per_group());
    assert_eq!(a.inode_size(), b.inode_size());
    assert_eq!(a.first_ino(), b.first_ino());
    assert_eq!(a.desc_size(), b.desc_size());
    assert_eq!(a.feature_compat(), b.feature_compat());
    assert_eq!(a.feature_incompat(), b.feature_incompat());
    assert_eq!(a.feature_ro_compat(), b.feature_ro_compat());
    assert_eq!(a.uuid(), b.uuid());
}
