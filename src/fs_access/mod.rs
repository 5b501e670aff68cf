use std::path::Path;

use crate::error::FsFailure;

mod std_fs;
pub use std_fs::StdFsAccess;

pub trait FsAccess {
    /// Size in bytes of the file at path
    fn file_size(&mut self, path: &Path) -> Result<u64, FsFailure>;

    /// Whether path exists and is a directory
    fn is_dir(&mut self, path: &Path) -> bool;

    /// Create dir and all of its missing ancestors
    fn create_dir_all(&mut self, dir: &Path) -> Result<(), FsFailure>;

    /// Replace the contents of dst with buf, creating it if necessary
    fn write_all(&mut self, dst: &Path, buf: &[u8]) -> Result<(), FsFailure>;

    /// Add buf to the end of dst, creating it if necessary
    fn append(&mut self, dst: &Path, buf: &[u8]) -> Result<(), FsFailure>;

    /// Read the full contents of src
    fn read(&mut self, src: &Path) -> Result<Vec<u8>, FsFailure>;
}
