//! Workflow commands understood by the CI runner.
//!
//! Outputs go to the file named by `GITHUB_OUTPUT` when available, everything
//! else is printed to stdout as `::command key=value::message` lines.

use std::{fs::OpenOptions, io::Write, path::PathBuf};

use miette::{bail, Result};
use uuid::Uuid;

use crate::{config::RunnerEnv, utils::Describe};

pub struct Runner {
    output_file: Option<PathBuf>,
}

impl Runner {
    pub fn new(env: &RunnerEnv) -> Self {
        Self {
            output_file: env
                .github_output
                .clone()
                .filter(|p| !p.as_os_str().is_empty()),
        }
    }

    /// Sets the step output `name` to `value`
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.output_file else {
            println!();
            println!("{}", command("set-output", &[("name", name)], value));
            return Ok(());
        };
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        let entry = file_command_entry(name, value, &delimiter)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_describe(|| format!("opening output file {path:?}"))?;
        file.write_all(entry.as_bytes())
            .with_describe(|| format!("writing output {name:?} to {path:?}"))
    }

    /// Marks the step as failed with `message`
    pub fn error(&self, message: &str) {
        println!("{}", command("error", &[], message));
    }

    pub fn debug(&self, message: &str) {
        println!("{}", command("debug", &[], message));
    }
}

fn file_command_entry(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        bail!("Unexpected input: name should not contain the delimiter {delimiter:?}");
    }
    if value.contains(delimiter) {
        bail!("Unexpected input: value should not contain the delimiter {delimiter:?}");
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut cmd = format!("::{name}");

    if !properties.is_empty() {
        let props = properties
            .iter()
            .map(|(k, v)| format!("{k}={}", escape_property(v)))
            .collect::<Vec<_>>()
            .join(",");
        cmd.push(' ');
        cmd.push_str(&props);
    }
    cmd.push_str("::");
    cmd.push_str(&escape_data(message));

    cmd
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
