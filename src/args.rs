use clap::Parser;

/// Writes text to a file and reports the resulting file size
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct Args {
    #[arg(short, long)]
    pub verbose: bool,

    /// The file to write to
    #[arg(long, env = "INPUT_PATH")]
    pub path: Option<String>,

    /// The text to write
    #[arg(long, env = "INPUT_CONTENTS")]
    pub contents: Option<String>,

    /// One of append, overwrite, preserve or prepend
    #[arg(long, env = "INPUT_WRITE-MODE")]
    pub write_mode: Option<String>,
}
