use std::{fmt, str::FromStr};

use crate::error::Error;

/// How new contents are combined with what is already in the target file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Append,
    Overwrite,
    /// Leave an existing file untouched, otherwise overwrite
    Preserve,
    Prepend,
}

impl FromStr for WriteMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "overwrite" => Ok(Self::Overwrite),
            "preserve" => Ok(Self::Preserve),
            "prepend" => Ok(Self::Prepend),
            _ => Err(Error::InvalidMode(s.to_owned())),
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WriteMode::Append => "append",
            WriteMode::Overwrite => "overwrite",
            WriteMode::Preserve => "preserve",
            WriteMode::Prepend => "prepend",
        };
        f.write_str(name)
    }
}
