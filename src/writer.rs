use std::path::Path;

use crate::{
    error::{Error, FsFailure, Phase},
    fs_access::FsAccess,
    mode::WriteMode,
    request::Request,
};

/// Result of a successful request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The file already existed in preserve mode and was left untouched
    Preserved { size: u64 },
    Written { size: u64 },
}

impl Outcome {
    pub fn size(&self) -> u64 {
        match self {
            Outcome::Preserved { size } | Outcome::Written { size } => *size,
        }
    }
}

pub struct FileWriter {
    fs: Box<dyn FsAccess>,
}

impl FileWriter {
    pub fn new(fs: Box<dyn FsAccess>) -> Self {
        Self { fs }
    }

    pub fn write(&mut self, req: &Request) -> Result<Outcome, Error> {
        let path = req.path.as_path();
        log::debug!("Writing to {path:?} in {} mode", req.mode);

        if req.mode == WriteMode::Preserve {
            match self.fs.file_size(path) {
                Ok(size) => {
                    log::info!("Preserving existing file {path:?}");
                    return Ok(Outcome::Preserved { size });
                }
                Err(failure) if failure.is_not_found() => {
                    log::debug!("{path:?} does not exist yet");
                }
                Err(failure) => return Err(Error::fs(Phase::PreserveCheck, failure)),
            }
        }

        self.ensure_parent(path).map_err(write_failure)?;
        let contents = req.contents.as_bytes();

        let written = match req.mode {
            WriteMode::Overwrite | WriteMode::Preserve => self.fs.write_all(path, contents),
            WriteMode::Append => self.fs.append(path, contents),
            WriteMode::Prepend => self.prepend(path, contents),
        };
        written.map_err(write_failure)?;

        let size = self.fs.file_size(path).map_err(write_failure)?;
        log::debug!("{path:?} is now {size} bytes");

        Ok(Outcome::Written { size })
    }

    /// Writes `contents`, a newline and then the previous content.
    /// The file has to exist already.
    fn prepend(&mut self, path: &Path, contents: &[u8]) -> Result<(), FsFailure> {
        let existing = self.fs.read(path)?;
        let mut buf = Vec::with_capacity(contents.len() + 1 + existing.len());
        buf.extend_from_slice(contents);
        buf.push(b'\n');
        buf.extend_from_slice(&existing);

        self.fs.write_all(path, &buf)
    }

    fn ensure_parent(&mut self, path: &Path) -> Result<(), FsFailure> {
        let Some(parent) = path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() || self.fs.is_dir(parent) {
            return Ok(());
        }
        log::info!("Creating {parent:?}");
        self.fs.create_dir_all(parent)
    }
}

fn write_failure(failure: FsFailure) -> Error {
    Error::fs(Phase::Write, failure)
}
