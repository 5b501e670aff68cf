use std::path::PathBuf;

use crate::{args::Args, error::Error, mode::WriteMode};

/// A single validated write request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub path: PathBuf,
    pub contents: String,
    pub mode: WriteMode,
}

impl Request {
    /// Builds a request from raw inputs.
    ///
    /// Inputs are trimmed. Required inputs fail only when absent or empty
    /// before trimming. A missing or blank mode means [`WriteMode::Append`].
    pub fn from_inputs(
        path: Option<&str>,
        contents: Option<&str>,
        mode: Option<&str>,
    ) -> Result<Self, Error> {
        let path = required_input(path, "path")?;
        let contents = required_input(contents, "contents")?;
        let mode = match optional_input(mode) {
            Some(mode) => mode.parse()?,
            None => WriteMode::default(),
        };

        Ok(Self {
            path: PathBuf::from(path),
            contents: contents.to_owned(),
            mode,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, Error> {
        Self::from_inputs(
            args.path.as_deref(),
            args.contents.as_deref(),
            args.write_mode.as_deref(),
        )
    }
}

/// Only a missing or empty raw value counts as not supplied,
/// trimming happens afterwards.
fn required_input<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, Error> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.trim()),
        _ => Err(Error::MissingInput(name)),
    }
}

fn optional_input(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
