use std::fs::File;

pub fn create_file(f: &File, bytes: u64) {
    f.set_len(0).unwrap();
    f.set_len(bytes).unwrap();
}

pub fn get_disk(f: &File) -> extfs::Disk {
    extfs::DiskFile::open_file(f.try_clone().unwrap()).unwrap()
}
