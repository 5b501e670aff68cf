use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use crate::error::FsFailure;

use super::FsAccess;

/// Filesystem access backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFsAccess;

impl FsAccess for StdFsAccess {
    fn file_size(&mut self, path: &Path) -> Result<u64, FsFailure> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| FsFailure::from_io(e, &format!("reading metadata of {path:?}")))
    }

    fn is_dir(&mut self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&mut self, dir: &Path) -> Result<(), FsFailure> {
        fs::create_dir_all(dir)
            .map_err(|e| FsFailure::from_io(e, &format!("creating directory {dir:?}")))
    }

    fn write_all(&mut self, dst: &Path, buf: &[u8]) -> Result<(), FsFailure> {
        fs::write(dst, buf).map_err(|e| {
            FsFailure::from_io(e, &format!("writing {} bytes to {dst:?}", buf.len()))
        })
    }

    fn append(&mut self, dst: &Path, buf: &[u8]) -> Result<(), FsFailure> {
        let action = || format!("appending {} bytes to {dst:?}", buf.len());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dst)
            .map_err(|e| FsFailure::from_io(e, &action()))?;

        file.write_all(buf)
            .map_err(|e| FsFailure::from_io(e, &action()))
    }

    fn read(&mut self, src: &Path) -> Result<Vec<u8>, FsFailure> {
        fs::read(src).map_err(|e| FsFailure::from_io(e, &format!("reading {src:?}")))
    }
}
